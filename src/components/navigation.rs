use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::app_view::AppView;

/// View switcher shared through context. There is no browser history
/// integration; views are a plain enum and switching is a signal write.
///
/// Going Home also resets the play queue to the full catalog and clears
/// the search box, so the player always reflects what the Home grid
/// shows after the jump.
#[derive(Clone)]
pub struct Navigation {
    current_view: Signal<AppView>,
    catalog: Signal<Vec<Song>>,
    queue: Signal<Vec<Song>>,
    search_query: Signal<String>,
}

impl Navigation {
    pub fn new(
        current_view: Signal<AppView>,
        catalog: Signal<Vec<Song>>,
        queue: Signal<Vec<Song>>,
        search_query: Signal<String>,
    ) -> Self {
        Self {
            current_view,
            catalog,
            queue,
            search_query,
        }
    }

    pub fn current(&self) -> AppView {
        (self.current_view)()
    }

    pub fn navigate_to(&self, target: AppView) {
        let mut current_view = self.current_view;

        // Home resets unconditionally, even when already on Home; every
        // other re-selection of the current view is a no-op.
        if target == AppView::Home {
            let mut queue = self.queue;
            let mut search_query = self.search_query;
            queue.set(self.catalog.peek().clone());
            search_query.set(String::new());
        } else if *current_view.peek() == target {
            return;
        }

        current_view.set(target);
    }

    /// Typing into the search box while looking at an artist page jumps
    /// back to Home so the matches are actually visible.
    pub fn search_entered(&self, query: &str) {
        if query.trim().is_empty() {
            return;
        }
        if matches!(self.current(), AppView::ArtistDetail(_)) {
            self.navigate_to(AppView::Home);
        }
    }

    pub fn open_playlist(&self, playlist_id: i64) {
        self.navigate_to(AppView::PlaylistDetail(playlist_id));
    }

    pub fn open_artist(&self, artist_id: i64) {
        self.navigate_to(AppView::ArtistDetail(artist_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Signals need a live Dioxus runtime and scope owner; host each test
    /// body inside a throwaway VirtualDom's root scope.
    fn in_test_runtime(f: impl FnOnce()) {
        let dom = VirtualDom::prebuilt(|| rsx! {});
        dom.in_scope(ScopeId::ROOT, f);
    }

    fn song(id: i64) -> Song {
        Song {
            id,
            name: format!("song-{id}"),
            ..Default::default()
        }
    }

    fn navigation(view: AppView, catalog: Vec<Song>, queue: Vec<Song>) -> Navigation {
        Navigation::new(
            Signal::new(view),
            Signal::new(catalog),
            Signal::new(queue),
            Signal::new("alp".to_string()),
        )
    }

    #[test]
    fn navigating_home_resets_queue_and_search() {
        in_test_runtime(|| {
            let nav = navigation(
                AppView::Favorites,
                vec![song(1), song(2)],
                vec![song(1)],
            );
            nav.navigate_to(AppView::Home);
            assert_eq!(nav.current(), AppView::Home);
            assert_eq!(nav.queue.peek().len(), 2);
            assert!(nav.search_query.peek().is_empty());
        });
    }

    #[test]
    fn home_resets_even_when_already_on_home() {
        in_test_runtime(|| {
            // a search narrowed the queue without leaving Home
            let nav = navigation(AppView::Home, vec![song(1), song(2)], vec![song(1)]);
            nav.navigate_to(AppView::Home);
            assert_eq!(nav.queue.peek().len(), 2);
            assert!(nav.search_query.peek().is_empty());
        });
    }

    #[test]
    fn reselecting_a_non_home_view_leaves_the_queue_alone() {
        in_test_runtime(|| {
            let nav = navigation(AppView::Library, vec![song(1), song(2)], vec![song(1)]);
            nav.navigate_to(AppView::Library);
            assert_eq!(nav.current(), AppView::Library);
            assert_eq!(nav.queue.peek().len(), 1);
            assert_eq!(&*nav.search_query.peek(), "alp");
        });
    }

    #[test]
    fn searching_from_an_artist_page_returns_home() {
        in_test_runtime(|| {
            let nav = navigation(
                AppView::ArtistDetail(7),
                vec![song(1), song(2)],
                vec![song(2)],
            );
            nav.search_entered("al");
            assert_eq!(nav.current(), AppView::Home);
            assert_eq!(nav.queue.peek().len(), 2);
        });
    }

    #[test]
    fn blank_or_off_artist_search_does_not_navigate() {
        in_test_runtime(|| {
            let nav = navigation(AppView::ArtistDetail(7), vec![song(1)], vec![song(1)]);
            nav.search_entered("   ");
            assert_eq!(nav.current(), AppView::ArtistDetail(7));

            let nav = navigation(AppView::Favorites, vec![song(1)], vec![song(1)]);
            nav.search_entered("al");
            assert_eq!(nav.current(), AppView::Favorites);
        });
    }
}
