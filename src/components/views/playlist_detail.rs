use dioxus::prelude::*;
use tracing::warn;

use crate::api::models::Song;
use crate::api::WaveOnClient;
use crate::components::views::home::SongRow;
use crate::components::{
    play_from, show_toast, spawn_refresh_playlists, spawn_toggle_like, AppView, CatalogSignal,
    Icon, Navigation, PlaylistsSignal, QueueSignal, ToastKind, ToastSignal,
};
use crate::session::AuthSession;
use crate::util::FALLBACK_COVER_URL;

#[component]
pub fn PlaylistDetailView(playlist_id: i64) -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let catalog = use_context::<CatalogSignal>().0;
    let queue = use_context::<QueueSignal>().0;
    let now_playing = use_context::<Signal<Option<Song>>>();
    let is_playing = use_context::<Signal<bool>>();
    let navigation = use_context::<Navigation>();
    let playlists = use_context::<PlaylistsSignal>().0;
    let toasts = use_context::<ToastSignal>().0;

    // Keyed on the id: switching playlists restarts the fetch and the
    // stale response is dropped with the old resource.
    let playlist = use_resource(move || async move {
        let client = WaveOnClient::new(session.peek().clone());
        client.get_playlist(playlist_id).await
    });

    let current_id = now_playing().map(|s| s.id);
    let viewer_id = session().user_id;

    rsx! {
        {match playlist() {
            Some(Ok(playlist)) => {
                let is_owner = viewer_id.is_some() && playlist.owner_id() == viewer_id;
                let songs = playlist.songs.clone();
                let cover = playlist
                    .image_url
                    .clone()
                    .unwrap_or_else(|| FALLBACK_COVER_URL.to_string());
                let on_delete = {
                    let navigation = navigation.clone();
                    move |_| {
                        let navigation = navigation.clone();
                        spawn(async move {
                            let client = WaveOnClient::new(session.peek().clone());
                            match client.delete_playlist(playlist_id).await {
                                Ok(()) => {
                                    show_toast(toasts, "Playlist deleted.", ToastKind::Info);
                                    spawn_refresh_playlists(session, playlists);
                                    navigation.navigate_to(AppView::Library);
                                }
                                Err(err) => {
                                    warn!("playlist delete failed: {err}");
                                    show_toast(toasts, "Could not delete playlist.", ToastKind::Error);
                                }
                            }
                        });
                    }
                };
                rsx! {
                    div { class: "space-y-6",
                        header { class: "flex items-end gap-6",
                            img {
                                src: "{cover}",
                                alt: "{playlist.title}",
                                class: "w-40 h-40 rounded-2xl object-cover bg-zinc-800 shadow-xl",
                            }
                            div { class: "flex-1 min-w-0",
                                div { class: "flex items-center gap-2",
                                    p { class: "text-xs uppercase tracking-widest text-zinc-400", "Playlist" }
                                    Icon {
                                        name: if playlist.visibility == crate::api::models::Visibility::Public { "globe".to_string() } else { "lock".to_string() },
                                        class: "w-3.5 h-3.5 text-zinc-500".to_string(),
                                    }
                                }
                                h1 { class: "text-3xl font-bold text-white truncate", "{playlist.title}" }
                                if !playlist.description.is_empty() {
                                    p { class: "text-sm text-zinc-400 mt-1", "{playlist.description}" }
                                }
                                p { class: "text-sm text-zinc-500 mt-1", "{songs.len()} songs" }
                            }
                            div { class: "flex items-center gap-2",
                                if !songs.is_empty() {
                                    button {
                                        class: "px-5 py-2.5 rounded-full bg-violet-500 text-white text-sm font-semibold hover:bg-violet-400 transition-colors flex items-center gap-2",
                                        onclick: {
                                            let songs = songs.clone();
                                            move |_| {
                                                play_from(queue, now_playing, is_playing, &songs, &songs[0]);
                                            }
                                        },
                                        Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                                        "Play"
                                    }
                                }
                                if is_owner {
                                    button {
                                        class: "p-2.5 rounded-full bg-zinc-800/60 text-zinc-300 hover:text-white transition-colors",
                                        aria_label: "Edit playlist",
                                        onclick: {
                                            let navigation = navigation.clone();
                                            move |_| navigation.navigate_to(AppView::PlaylistEdit(playlist_id))
                                        },
                                        Icon { name: "edit".to_string(), class: "w-4 h-4".to_string() }
                                    }
                                    button {
                                        class: "p-2.5 rounded-full bg-zinc-800/60 text-zinc-300 hover:text-rose-400 transition-colors",
                                        aria_label: "Delete playlist",
                                        onclick: on_delete,
                                        Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                                    }
                                }
                            }
                        }

                        if songs.is_empty() {
                            div { class: "flex flex-col items-center justify-center py-16",
                                Icon {
                                    name: "playlist".to_string(),
                                    class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                                }
                                p { class: "text-zinc-400", "This playlist is empty" }
                            }
                        } else {
                            div { class: "space-y-1",
                                for (index , song) in songs.iter().enumerate() {
                                    SongRow {
                                        song: song.clone(),
                                        index: index + 1,
                                        active: current_id == Some(song.id),
                                        onplay: {
                                            let song = song.clone();
                                            let songs = songs.clone();
                                            move |_| {
                                                play_from(queue, now_playing, is_playing, &songs, &song);
                                            }
                                        },
                                        onlike: {
                                            let song = song.clone();
                                            move |_| {
                                                spawn_toggle_like(
                                                    session,
                                                    &song,
                                                    catalog,
                                                    queue,
                                                    now_playing,
                                                    toasts,
                                                );
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(err)) => {
                warn!("playlist fetch failed: {err}");
                rsx! {
                    div { class: "flex flex-col items-center justify-center py-20",
                        Icon {
                            name: "playlist".to_string(),
                            class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                        }
                        h2 { class: "text-xl font-semibold text-white mb-2", "Playlist not found" }
                        p { class: "text-zinc-400", "It may have been deleted or made private" }
                        button {
                            class: "mt-4 px-5 py-2 rounded-full bg-zinc-800 text-sm text-white hover:bg-zinc-700 transition-colors",
                            onclick: {
                                let navigation = navigation.clone();
                                move |_| navigation.navigate_to(AppView::Home)
                            },
                            "Back to Home"
                        }
                    }
                }
            }
            None => rsx! {
                div { class: "flex items-center justify-center py-20",
                    Icon {
                        name: "loader".to_string(),
                        class: "w-8 h-8 text-zinc-500".to_string(),
                    }
                }
            },
        }}
    }
}
