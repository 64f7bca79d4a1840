//! Defines the shared application view state.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppView {
    Home,
    Explore,
    Library,
    Favorites,
    Galaxy,
    PlaylistDetail(i64),
    PlaylistCreate,
    PlaylistEdit(i64),
    ArtistDetail(i64),
    ArtistStudio,
    Profile(i64),
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Home => "Home",
        AppView::Explore => "Explore",
        AppView::Library => "Library",
        AppView::Favorites => "Favorites",
        AppView::Galaxy => "Galaxy",
        AppView::PlaylistDetail(_) => "Playlist",
        AppView::PlaylistCreate => "New Playlist",
        AppView::PlaylistEdit(_) => "Edit Playlist",
        AppView::ArtistDetail(_) => "Artist",
        AppView::ArtistStudio => "Artist Studio",
        AppView::Profile(_) => "Profile",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_a_label() {
        let views = [
            AppView::Home,
            AppView::Explore,
            AppView::Library,
            AppView::Favorites,
            AppView::Galaxy,
            AppView::PlaylistDetail(1),
            AppView::PlaylistCreate,
            AppView::PlaylistEdit(1),
            AppView::ArtistDetail(1),
            AppView::ArtistStudio,
            AppView::Profile(1),
        ];
        for view in views {
            assert!(!view_label(&view).is_empty());
        }
    }
}
