use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::views::home::SongRow;
use crate::components::{
    play_from, spawn_toggle_like, CatalogSignal, Icon, QueueSignal, ToastSignal,
};
use crate::session::AuthSession;

/// Liked songs, derived straight from the catalog's merged like flags.
#[component]
pub fn FavoritesView() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let catalog = use_context::<CatalogSignal>().0;
    let queue = use_context::<QueueSignal>().0;
    let now_playing = use_context::<Signal<Option<Song>>>();
    let is_playing = use_context::<Signal<bool>>();
    let toasts = use_context::<ToastSignal>().0;

    let liked: Vec<Song> = catalog().into_iter().filter(|s| s.is_liked).collect();
    let current_id = now_playing().map(|s| s.id);

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-end gap-6",
                div { class: "w-40 h-40 rounded-2xl bg-gradient-to-br from-violet-600 to-fuchsia-700 flex items-center justify-center shadow-xl",
                    Icon {
                        name: "heart-filled".to_string(),
                        class: "w-16 h-16 text-white".to_string(),
                    }
                }
                div {
                    p { class: "text-xs uppercase tracking-widest text-zinc-400", "Playlist" }
                    h1 { class: "text-3xl font-bold text-white", "Liked Songs" }
                    p { class: "text-sm text-zinc-400 mt-1", "{liked.len()} songs" }
                }
            }

            if liked.is_empty() {
                div { class: "flex flex-col items-center justify-center py-20",
                    Icon {
                        name: "heart".to_string(),
                        class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                    }
                    h2 { class: "text-xl font-semibold text-white mb-2", "No liked songs yet" }
                    p { class: "text-zinc-400", "Tap the heart on any song to keep it here" }
                }
            } else {
                div { class: "space-y-1",
                    for (index , song) in liked.iter().enumerate() {
                        SongRow {
                            song: song.clone(),
                            index: index + 1,
                            active: current_id == Some(song.id),
                            onplay: {
                                let song = song.clone();
                                let liked = liked.clone();
                                move |_| {
                                    play_from(queue, now_playing, is_playing, &liked, &song);
                                }
                            },
                            onlike: {
                                let song = song.clone();
                                move |_| {
                                    spawn_toggle_like(session, &song, catalog, queue, now_playing, toasts);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
