use dioxus::prelude::*;
use tracing::{error, warn};

use crate::api::client::WaveOnClient;
use crate::api::models::{Song, UserAccount, UserProfile};
use crate::components::views::home::SongRow;
use crate::components::{
    play_from, show_toast, AppView, CatalogSignal, Icon, Navigation, PlaylistsSignal, QueueSignal,
    ToastKind, ToastSignal,
};
use crate::session::AuthSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Playlists,
    Songs,
}

#[component]
pub fn ProfileView(user_id: i64) -> Element {
    let mut session = use_context::<Signal<AuthSession>>();
    let mut catalog = use_context::<CatalogSignal>().0;
    let mut queue = use_context::<QueueSignal>().0;
    let mut now_playing = use_context::<Signal<Option<Song>>>();
    let is_playing = use_context::<Signal<bool>>();
    let mut playlists = use_context::<PlaylistsSignal>().0;
    let navigation = use_context::<Navigation>();
    let toasts = use_context::<ToastSignal>().0;

    let mut tab = use_signal(|| ProfileTab::Playlists);
    // Bumped after role changes so the resource refetches.
    let mut reload = use_signal(|| 0u32);

    let profile = use_resource(move || {
        let auth = session();
        let _generation = reload();
        async move {
            let viewer_id = auth.user_id.unwrap_or(0);
            let client = WaveOnClient::new(auth);
            let profile = client.get_profile(user_id, viewer_id).await?;
            let account = client.get_user(user_id).await?;
            Ok::<(UserProfile, UserAccount), String>((profile, account))
        }
    });

    rsx! {
        {match profile() {
            Some(Ok((profile, account))) => {
                let is_owner = profile.is_owner || session().user_id == Some(user_id);
                let is_artist = account.is_artist();
                let display_name = profile
                    .user
                    .username
                    .clone()
                    .unwrap_or_else(|| account.username.clone());
                // Artist ids mirror user ids in the backend, so an artist's
                // uploads are the catalog rows carrying this profile's id.
                let uploads: Vec<Song> = catalog()
                    .into_iter()
                    .filter(|s| s.artist_id() == Some(user_id))
                    .collect();
                let current_id = now_playing().map(|s| s.id);
                let active_tab = tab();

                rsx! {
                    div { class: "space-y-8",
                        header { class: "flex items-end gap-6",
                            div { class: "w-32 h-32 rounded-full bg-gradient-to-br from-violet-500 to-fuchsia-600 flex items-center justify-center text-5xl font-bold text-white shadow-xl",
                                "{display_name.chars().next().unwrap_or('?').to_uppercase()}"
                            }
                            div { class: "flex-1",
                                p { class: "text-xs uppercase tracking-widest text-zinc-400",
                                    if is_artist { "Artist" } else { "Listener" }
                                }
                                h1 { class: "text-4xl font-bold text-white", "{display_name}" }
                                p { class: "text-sm text-zinc-400 mt-1",
                                    "{profile.playlists.len()} public playlists"
                                    if is_artist {
                                        " · {uploads.len()} uploads"
                                    }
                                }
                            }
                            if is_owner {
                                div { class: "flex items-center gap-2",
                                    if is_artist {
                                        button {
                                            class: "flex items-center gap-2 px-4 py-2 rounded-full bg-violet-500 text-sm font-semibold text-white hover:bg-violet-400 transition-colors",
                                            onclick: {
                                                let navigation = navigation.clone();
                                                move |_| navigation.navigate_to(AppView::ArtistStudio)
                                            },
                                            Icon { name: "upload".to_string(), class: "w-4 h-4".to_string() }
                                            "Artist Studio"
                                        }
                                    } else {
                                        button {
                                            class: "px-4 py-2 rounded-full bg-zinc-800 text-sm text-white hover:bg-zinc-700 transition-colors",
                                            onclick: move |_| {
                                                let auth = session.peek().clone();
                                                spawn(async move {
                                                    let client = WaveOnClient::new(auth);
                                                    match client.become_artist(user_id).await {
                                                        Ok(()) => {
                                                            show_toast(
                                                                toasts,
                                                                "You are an artist now. Welcome to the studio.",
                                                                ToastKind::Info,
                                                            );
                                                            reload += 1;
                                                        }
                                                        Err(err) => {
                                                            error!("become-artist failed: {err}");
                                                            show_toast(toasts, err, ToastKind::Error);
                                                        }
                                                    }
                                                });
                                            },
                                            "Become an Artist"
                                        }
                                    }
                                    button {
                                        class: "px-4 py-2 rounded-full border border-zinc-700 text-sm text-zinc-300 hover:border-rose-500/60 hover:text-rose-300 transition-colors",
                                        onclick: {
                                            let navigation = navigation.clone();
                                            move |_| {
                                                session.set(AuthSession::clear());
                                                playlists.set(Vec::new());
                                                show_toast(toasts, "Signed out", ToastKind::Info);
                                                navigation.navigate_to(AppView::Home);
                                            }
                                        },
                                        "Log Out"
                                    }
                                }
                            }
                        }

                        if is_artist {
                            div { class: "flex items-center gap-2",
                                TabButton {
                                    label: "Playlists",
                                    active: active_tab == ProfileTab::Playlists,
                                    onclick: move |_| tab.set(ProfileTab::Playlists),
                                }
                                TabButton {
                                    label: "Songs",
                                    active: active_tab == ProfileTab::Songs,
                                    onclick: move |_| tab.set(ProfileTab::Songs),
                                }
                            }
                        }

                        if active_tab == ProfileTab::Songs && is_artist {
                            if uploads.is_empty() {
                                p { class: "text-sm text-zinc-500", "No uploads yet" }
                            } else {
                                div { class: "space-y-1",
                                    for (index , song) in uploads.iter().enumerate() {
                                        div { class: "flex items-center gap-2 group/manage",
                                            div { class: "flex-1",
                                                SongRow {
                                                    song: song.clone(),
                                                    index: index + 1,
                                                    active: current_id == Some(song.id),
                                                    onplay: {
                                                        let song = song.clone();
                                                        let uploads = uploads.clone();
                                                        move |_| {
                                                            play_from(queue, now_playing, is_playing, &uploads, &song);
                                                        }
                                                    },
                                                    onlike: {
                                                        let song = song.clone();
                                                        move |_| {
                                                            crate::components::spawn_toggle_like(
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
                                            if is_owner {
                                                button {
                                                    class: "p-2 rounded-full text-zinc-500 hover:text-rose-400 hover:bg-zinc-800 transition-colors",
                                                    title: "Delete song",
                                                    onclick: {
                                                        let song_id = song.id;
                                                        move |_| {
                                                            let auth = session.peek().clone();
                                                            spawn(async move {
                                                                let client = WaveOnClient::new(auth);
                                                                match client.delete_song(song_id).await {
                                                                    Ok(()) => {
                                                                        catalog.with_mut(|s| s.retain(|x| x.id != song_id));
                                                                        queue.with_mut(|s| s.retain(|x| x.id != song_id));
                                                                        if now_playing.peek().as_ref().map(|s| s.id)
                                                                            == Some(song_id)
                                                                        {
                                                                            now_playing.set(None);
                                                                        }
                                                                        show_toast(toasts, "Song deleted", ToastKind::Info);
                                                                    }
                                                                    Err(err) => {
                                                                        error!("song delete failed: {err}");
                                                                        show_toast(toasts, err, ToastKind::Error);
                                                                    }
                                                                }
                                                            });
                                                        }
                                                    },
                                                    Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        } else {
                            if profile.playlists.is_empty() {
                                p { class: "text-sm text-zinc-500", "No public playlists yet" }
                            } else {
                                div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4",
                                    for playlist in profile.playlists {
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
                }
            }
            Some(Err(err)) => {
                warn!("profile load failed: {err}");
                rsx! {
                    div { class: "flex flex-col items-center justify-center py-20",
                        Icon {
                            name: "user".to_string(),
                            class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                        }
                        h2 { class: "text-xl font-semibold text-white mb-2", "Profile unavailable" }
                        p { class: "text-zinc-400", "{err}" }
                    }
                }
            }
            None => rsx! {
                div { class: "flex items-center justify-center py-20",
                    Icon {
                        name: "loader".to_string(),
                        class: "w-8 h-8 text-violet-400 animate-spin".to_string(),
                    }
                }
            },
        }}
    }
}

#[component]
fn TabButton(label: &'static str, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: if active {
                "px-4 py-1.5 rounded-full bg-violet-500 text-sm font-semibold text-white"
            } else {
                "px-4 py-1.5 rounded-full bg-zinc-800 text-sm text-zinc-300 hover:bg-zinc-700 transition-colors"
            },
            onclick: move |e| onclick.call(e),
            "{label}"
        }
    }
}
