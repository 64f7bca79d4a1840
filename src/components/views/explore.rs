use dioxus::prelude::*;
use tracing::warn;

use crate::api::models::Song;
use crate::api::WaveOnClient;
use crate::components::{AppView, CatalogSignal, Icon, QueueSignal};
use crate::session::AuthSession;

const GENRE_GRADIENTS: [&str; 6] = [
    "from-violet-600 to-indigo-700",
    "from-rose-600 to-orange-600",
    "from-emerald-600 to-teal-700",
    "from-sky-600 to-blue-700",
    "from-amber-500 to-red-600",
    "from-fuchsia-600 to-purple-700",
];

/// Genre browser. Picking a genre pulls that slice of the catalog into
/// the play queue and jumps back to Home to show it.
#[component]
pub fn ExploreView() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let catalog = use_context::<CatalogSignal>().0;
    let mut queue = use_context::<QueueSignal>().0;
    let mut current_view = use_context::<Signal<AppView>>();

    let mut genres: Vec<String> = Vec::new();
    for song in catalog().iter() {
        if !song.genre.is_empty() && !genres.contains(&song.genre) {
            genres.push(song.genre.clone());
        }
    }

    let on_genre = move |genre: String| {
        let snapshot = session.peek().clone();
        spawn(async move {
            let client = WaveOnClient::new(snapshot);
            match client.get_songs_by_genre(&genre).await {
                Ok(songs) if !songs.is_empty() => {
                    queue.set(songs);
                    current_view.set(AppView::Home);
                }
                Ok(_) => warn!("genre {genre} has no songs"),
                Err(err) => warn!("genre fetch failed: {err}"),
            }
        });
    };

    rsx! {
        div { class: "space-y-6",
            h1 { class: "text-2xl font-bold text-white", "Explore" }
            if genres.is_empty() {
                div { class: "flex flex-col items-center justify-center py-20",
                    Icon {
                        name: "compass".to_string(),
                        class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                    }
                    p { class: "text-zinc-400", "No genres to browse yet" }
                }
            } else {
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4",
                    for (i , genre) in genres.into_iter().enumerate() {
                        button {
                            class: format!(
                                "relative h-32 rounded-xl bg-gradient-to-br {} p-4 text-left overflow-hidden hover:scale-[1.02] transition-transform",
                                GENRE_GRADIENTS[i % GENRE_GRADIENTS.len()],
                            ),
                            onclick: {
                                let on_genre = on_genre.clone();
                                let genre = genre.clone();
                                move |_| on_genre(genre.clone())
                            },
                            span { class: "text-lg font-bold text-white drop-shadow", "{genre}" }
                            Icon {
                                name: "music".to_string(),
                                class: "w-16 h-16 text-white/20 absolute -bottom-2 -right-2 rotate-12"
                                    .to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}
