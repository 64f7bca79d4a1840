use dioxus::prelude::*;

use crate::api::WaveOnClient;
use crate::components::{Icon, Navigation};
use crate::session::AuthSession;
use crate::util::{FALLBACK_ARTIST_URL, FALLBACK_COVER_URL};

/// The signed-in user's saved playlists and followed artists.
#[component]
pub fn LibraryView() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let navigation = use_context::<Navigation>();

    let mut active_tab = use_signal(|| "playlists".to_string());

    let library = use_resource(move || async move {
        let snapshot = session();
        let user_id = snapshot.user_id?;
        let client = WaveOnClient::new(snapshot);
        client.get_library(user_id).await.ok()
    });

    if !session().is_authenticated() {
        return rsx! {
            div { class: "flex flex-col items-center justify-center py-20",
                Icon {
                    name: "library".to_string(),
                    class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                }
                h2 { class: "text-xl font-semibold text-white mb-2", "Your library lives here" }
                p { class: "text-zinc-400", "Sign in to see your playlists and followed artists" }
            }
        };
    }

    let tab = active_tab();

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-center gap-4",
                h1 { class: "text-2xl font-bold text-white", "Library" }
                div { class: "flex gap-2",
                    button {
                        class: if tab == "playlists" { "px-4 py-2 rounded-full bg-violet-500/20 text-violet-400 text-sm font-medium" } else { "px-4 py-2 rounded-full bg-zinc-800/50 text-zinc-400 hover:text-white text-sm font-medium transition-colors" },
                        onclick: move |_| active_tab.set("playlists".to_string()),
                        "Playlists"
                    }
                    button {
                        class: if tab == "artists" { "px-4 py-2 rounded-full bg-violet-500/20 text-violet-400 text-sm font-medium" } else { "px-4 py-2 rounded-full bg-zinc-800/50 text-zinc-400 hover:text-white text-sm font-medium transition-colors" },
                        onclick: move |_| active_tab.set("artists".to_string()),
                        "Artists"
                    }
                }
            }

            {match library() {
                Some(Some(library)) => rsx! {
                    if tab == "playlists" {
                        if library.playlists.is_empty() {
                            EmptyShelf { message: "No playlists saved yet" }
                        } else {
                            div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4",
                                for playlist in library.playlists {
                                    button {
                                        class: "group rounded-xl bg-zinc-900/60 border border-zinc-800/60 p-3 text-left hover:bg-zinc-800/60 transition-colors",
                                        onclick: {
                                            let navigation = navigation.clone();
                                            let id = playlist.id;
                                            move |_| navigation.open_playlist(id)
                                        },
                                        img {
                                            src: playlist.image_url.clone().unwrap_or_else(|| FALLBACK_COVER_URL.to_string()),
                                            alt: "{playlist.title}",
                                            class: "w-full aspect-square rounded-lg object-cover bg-zinc-800 mb-3",
                                            loading: "lazy",
                                        }
                                        p { class: "text-sm font-medium text-white truncate", "{playlist.title}" }
                                        p { class: "text-xs text-zinc-400 truncate", "{playlist.songs.len()} songs" }
                                    }
                                }
                            }
                        }
                    } else {
                        if library.followed_artists.is_empty() {
                            EmptyShelf { message: "You are not following any artists" }
                        } else {
                            div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-6",
                                for artist in library.followed_artists {
                                    button {
                                        class: "flex flex-col items-center gap-2 group",
                                        onclick: {
                                            let navigation = navigation.clone();
                                            let id = artist.id;
                                            move |_| navigation.open_artist(id)
                                        },
                                        img {
                                            src: artist.image_url.clone().unwrap_or_else(|| FALLBACK_ARTIST_URL.to_string()),
                                            alt: "{artist.name}",
                                            class: "w-28 h-28 rounded-full object-cover bg-zinc-800 group-hover:ring-2 group-hover:ring-violet-500/60 transition-all",
                                            loading: "lazy",
                                        }
                                        span { class: "text-sm text-zinc-300 group-hover:text-white transition-colors",
                                            "{artist.name}"
                                        }
                                        span { class: "text-xs text-zinc-500", "{artist.followers} followers" }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(None) => rsx! {
                    EmptyShelf { message: "Could not load your library" }
                },
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
}

#[component]
fn EmptyShelf(message: &'static str) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-20",
            Icon {
                name: "library".to_string(),
                class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
            }
            p { class: "text-zinc-400", "{message}" }
        }
    }
}
