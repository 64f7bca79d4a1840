use dioxus::prelude::*;

use crate::api::models::{Playlist, Song};
use crate::components::views::home::SongRow;
use crate::components::{
    play_from, spawn_toggle_like, CatalogSignal, Icon, Navigation, PlaylistsSignal, QueueSignal,
    ToastSignal,
};
use crate::session::AuthSession;
use crate::util::FALLBACK_ARTIST_URL;

#[component]
pub fn ArtistDetailView(artist_id: i64) -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let catalog = use_context::<CatalogSignal>().0;
    let queue = use_context::<QueueSignal>().0;
    let now_playing = use_context::<Signal<Option<Song>>>();
    let is_playing = use_context::<Signal<bool>>();
    let navigation = use_context::<Navigation>();
    let playlists = use_context::<PlaylistsSignal>().0;
    let toasts = use_context::<ToastSignal>().0;

    let songs: Vec<Song> = catalog()
        .into_iter()
        .filter(|s| s.artist_id() == Some(artist_id))
        .collect();
    let artist = songs.iter().find_map(|s| s.artist.clone());

    let Some(artist) = artist else {
        return rsx! {
            div { class: "flex flex-col items-center justify-center py-20",
                Icon {
                    name: "user".to_string(),
                    class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                }
                h2 { class: "text-xl font-semibold text-white mb-2", "Artist not found" }
                p { class: "text-zinc-400", "No tracks by this artist are in the catalog" }
                button {
                    class: "mt-4 px-5 py-2 rounded-full bg-zinc-800 text-sm text-white hover:bg-zinc-700 transition-colors",
                    onclick: {
                        let navigation = navigation.clone();
                        move |_| navigation.navigate_to(crate::components::AppView::Home)
                    },
                    "Back to Home"
                }
            }
        };
    };

    // Playlists carrying at least one of this artist's tracks, with the
    // album-like ones shelved separately.
    let (albums, appears_in): (Vec<Playlist>, Vec<Playlist>) = playlists()
        .into_iter()
        .filter(|p| {
            p.songs
                .iter()
                .any(|s| s.artist_id() == Some(artist_id))
        })
        .partition(|p| p.looks_like_album());

    let avatar = artist
        .image_url
        .clone()
        .unwrap_or_else(|| FALLBACK_ARTIST_URL.to_string());
    let current_id = now_playing().map(|s| s.id);

    rsx! {
        div { class: "space-y-8",
            header { class: "flex items-end gap-6",
                img {
                    src: "{avatar}",
                    alt: "{artist.name}",
                    class: "w-40 h-40 rounded-full object-cover bg-zinc-800 shadow-xl",
                }
                div { class: "flex-1",
                    p { class: "text-xs uppercase tracking-widest text-zinc-400", "Artist" }
                    h1 { class: "text-4xl font-bold text-white", "{artist.name}" }
                    p { class: "text-sm text-zinc-400 mt-1",
                        "{artist.followers} followers · {songs.len()} songs"
                    }
                }
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
            }

            section {
                h2 { class: "text-xl font-bold text-white mb-3", "Songs" }
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
                                    spawn_toggle_like(session, &song, catalog, queue, now_playing, toasts);
                                }
                            },
                        }
                    }
                }
            }

            if !albums.is_empty() {
                PlaylistShelf { title: "Albums", playlists: albums }
            }
            if !appears_in.is_empty() {
                PlaylistShelf { title: "Appears In", playlists: appears_in }
            }
        }
    }
}

#[component]
fn PlaylistShelf(title: &'static str, playlists: Vec<Playlist>) -> Element {
    let navigation = use_context::<Navigation>();

    rsx! {
        section {
            h2 { class: "text-xl font-bold text-white mb-3", "{title}" }
            div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4",
                for playlist in playlists {
                    button {
                        class: "rounded-xl bg-zinc-900/60 border border-zinc-800/60 p-3 text-left hover:bg-zinc-800/60 transition-colors",
                        onclick: {
                            let navigation = navigation.clone();
                            let id = playlist.id;
                            move |_| navigation.open_playlist(id)
                        },
                        div { class: "w-full aspect-square rounded-lg bg-gradient-to-br from-zinc-700 to-zinc-800 mb-3 flex items-center justify-center overflow-hidden",
                            if let Some(cover) = playlist.image_url.clone() {
                                img {
                                    src: "{cover}",
                                    alt: "{playlist.title}",
                                    class: "w-full h-full object-cover",
                                }
                            } else {
                                Icon {
                                    name: "playlist".to_string(),
                                    class: "w-10 h-10 text-zinc-500".to_string(),
                                }
                            }
                        }
                        p { class: "text-sm font-medium text-white truncate", "{playlist.title}" }
                        p { class: "text-xs text-zinc-400", "{playlist.songs.len()} songs" }
                    }
                }
            }
        }
    }
}
