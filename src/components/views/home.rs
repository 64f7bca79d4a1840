use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::{
    play_from, spawn_toggle_like, CatalogSignal, Icon, Navigation, QueueSignal, SearchQuerySignal,
    ToastSignal,
};
use crate::search::unique_artists;
use crate::session::AuthSession;
use crate::util::{FALLBACK_ARTIST_URL, FALLBACK_COVER_URL};

#[component]
pub fn HomeView() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let catalog = use_context::<CatalogSignal>().0;
    let queue = use_context::<QueueSignal>().0;
    let now_playing = use_context::<Signal<Option<Song>>>();
    let is_playing = use_context::<Signal<bool>>();
    let search_query = use_context::<SearchQuerySignal>().0;
    let navigation = use_context::<Navigation>();
    let toasts = use_context::<ToastSignal>().0;

    let songs = queue();
    // The strip follows the active queue, so a search narrows it to the
    // artists of the matched songs.
    let artists = unique_artists(&songs);
    let searching = !search_query().trim().is_empty();
    let current_id = now_playing().map(|s| s.id);

    rsx! {
        div { class: "space-y-10",
            section {
                h1 { class: "text-2xl font-bold text-white mb-4",
                    if searching {
                        "Results"
                    } else {
                        "Listen Now"
                    }
                }
                if songs.is_empty() {
                    div { class: "flex flex-col items-center justify-center py-20",
                        Icon {
                            name: "music".to_string(),
                            class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                        }
                        h2 { class: "text-xl font-semibold text-white mb-2", "Nothing here" }
                        p { class: "text-zinc-400",
                            if searching {
                                "No songs match your search"
                            } else {
                                "The catalog is empty right now"
                            }
                        }
                    }
                } else {
                    div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 xl:grid-cols-6 gap-4",
                        for song in songs.iter() {
                            SongCard {
                                song: song.clone(),
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

            if !artists.is_empty() {
                section {
                    h2 { class: "text-xl font-bold text-white mb-4", "Artists for You" }
                    div { class: "flex gap-6 overflow-x-auto pb-2",
                        for artist in artists {
                            button {
                                class: "flex flex-col items-center gap-2 flex-shrink-0 group",
                                onclick: {
                                    let navigation = navigation.clone();
                                    let id = artist.id;
                                    move |_| navigation.open_artist(id)
                                },
                                img {
                                    src: artist.image_url.clone().unwrap_or_else(|| FALLBACK_ARTIST_URL.to_string()),
                                    alt: "{artist.name}",
                                    class: "w-24 h-24 rounded-full object-cover bg-zinc-800 group-hover:ring-2 group-hover:ring-violet-500/60 transition-all",
                                    loading: "lazy",
                                }
                                span { class: "text-sm text-zinc-300 group-hover:text-white transition-colors",
                                    "{artist.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SongCard(
    song: Song,
    active: bool,
    onplay: EventHandler<MouseEvent>,
    onlike: EventHandler<MouseEvent>,
) -> Element {
    let cover = song
        .image_url
        .clone()
        .unwrap_or_else(|| FALLBACK_COVER_URL.to_string());

    rsx! {
        div { class: "group relative rounded-xl bg-zinc-900/60 border border-zinc-800/60 p-3 hover:bg-zinc-800/60 transition-colors",
            button {
                class: "block w-full text-left",
                onclick: move |e| onplay.call(e),
                div { class: "relative mb-3",
                    img {
                        src: "{cover}",
                        alt: "{song.name}",
                        class: "w-full aspect-square rounded-lg object-cover bg-zinc-800",
                        loading: "lazy",
                    }
                    div { class: "absolute inset-0 rounded-lg bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center",
                        Icon { name: "play".to_string(), class: "w-10 h-10 text-white".to_string() }
                    }
                }
                p {
                    class: if active { "text-sm font-medium text-violet-400 truncate" } else { "text-sm font-medium text-white truncate" },
                    "{song.name}"
                }
                p { class: "text-xs text-zinc-400 truncate", "{song.artist_name()}" }
            }
            button {
                class: if song.is_liked { "absolute top-4 right-4 p-1.5 rounded-full bg-black/50 text-violet-400 opacity-100 transition-opacity" } else { "absolute top-4 right-4 p-1.5 rounded-full bg-black/50 text-zinc-300 opacity-0 group-hover:opacity-100 transition-opacity" },
                aria_label: "Toggle like",
                onclick: move |e| {
                    e.stop_propagation();
                    onlike.call(e);
                },
                Icon {
                    name: if song.is_liked { "heart-filled".to_string() } else { "heart".to_string() },
                    class: "w-4 h-4".to_string(),
                }
            }
        }
    }
}

#[component]
pub fn SongRow(
    song: Song,
    index: usize,
    active: bool,
    onplay: EventHandler<MouseEvent>,
    onlike: EventHandler<MouseEvent>,
) -> Element {
    let cover = song
        .image_url
        .clone()
        .unwrap_or_else(|| FALLBACK_COVER_URL.to_string());

    rsx! {
        div { class: "group flex items-center gap-4 rounded-lg px-3 py-2 hover:bg-zinc-800/60 transition-colors",
            span { class: "w-6 text-right text-sm text-zinc-500", "{index}" }
            button {
                class: "flex items-center gap-3 flex-1 min-w-0 text-left",
                onclick: move |e| onplay.call(e),
                img {
                    src: "{cover}",
                    alt: "{song.name}",
                    class: "w-10 h-10 rounded object-cover bg-zinc-800",
                    loading: "lazy",
                }
                div { class: "min-w-0",
                    p {
                        class: if active { "text-sm font-medium text-violet-400 truncate" } else { "text-sm font-medium text-white truncate" },
                        "{song.name}"
                    }
                    p { class: "text-xs text-zinc-400 truncate", "{song.artist_name()}" }
                }
            }
            span { class: "text-xs text-zinc-500 uppercase hidden sm:block", "{song.genre}" }
            button {
                class: if song.is_liked { "p-2 text-violet-400 hover:text-violet-300 transition-colors" } else { "p-2 text-zinc-500 hover:text-violet-400 transition-colors opacity-0 group-hover:opacity-100" },
                aria_label: "Toggle like",
                onclick: move |e| onlike.call(e),
                Icon {
                    name: if song.is_liked { "heart-filled".to_string() } else { "heart".to_string() },
                    class: "w-4 h-4".to_string(),
                }
            }
        }
    }
}
