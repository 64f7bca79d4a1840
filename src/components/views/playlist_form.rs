use dioxus::prelude::*;
use tracing::warn;

use crate::api::models::{PlaylistPayload, SongRef, UserRef, Visibility};
use crate::api::WaveOnClient;
use crate::components::{
    show_toast, spawn_refresh_playlists, AppView, CatalogSignal, Icon, Navigation,
    PlaylistsSignal, ToastKind, ToastSignal,
};
use crate::session::AuthSession;
use crate::util::FALLBACK_COVER_URL;

/// Create/edit form for playlists. `playlist_id` decides the mode; in
/// edit mode the fields populate once from the fetched playlist.
#[component]
pub fn PlaylistFormView(playlist_id: Option<i64>) -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let catalog = use_context::<CatalogSignal>().0;
    let navigation = use_context::<Navigation>();
    let playlists = use_context::<PlaylistsSignal>().0;
    let toasts = use_context::<ToastSignal>().0;

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut is_public = use_signal(|| true);
    let mut selected = use_signal(Vec::<i64>::new);
    let mut loaded = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let existing = use_resource(move || async move {
        let Some(id) = playlist_id else {
            return None;
        };
        let client = WaveOnClient::new(session.peek().clone());
        client.get_playlist(id).await.ok()
    });

    use_effect(move || {
        if *loaded.peek() {
            return;
        }
        if let Some(Some(playlist)) = existing() {
            title.set(playlist.title.clone());
            description.set(playlist.description.clone());
            image_url.set(playlist.image_url.clone().unwrap_or_default());
            is_public.set(playlist.visibility == Visibility::Public);
            selected.set(playlist.songs.iter().map(|s| s.id).collect());
            loaded.set(true);
        }
    });

    let on_save = {
        let navigation = navigation.clone();
        move |_| {
            if saving() {
                return;
            }
            let snapshot = session.peek().clone();
            let Some(user_id) = snapshot.user_id else {
                show_toast(toasts, "Sign in to save playlists.", ToastKind::Error);
                return;
            };
            if title.peek().trim().is_empty() {
                show_toast(toasts, "Give your playlist a title.", ToastKind::Error);
                return;
            }

            let cover = {
                let raw = image_url.peek().trim().to_string();
                if raw.is_empty() {
                    FALLBACK_COVER_URL.to_string()
                } else {
                    raw
                }
            };
            let payload = PlaylistPayload {
                title: title.peek().trim().to_string(),
                description: description.peek().trim().to_string(),
                visibility: if *is_public.peek() {
                    Visibility::Public
                } else {
                    Visibility::Private
                },
                image_url: cover,
                user_id: UserRef {
                    id: user_id,
                    username: None,
                },
                songs: selected.peek().iter().map(|&id| SongRef { id }).collect(),
            };

            saving.set(true);
            let navigation = navigation.clone();
            spawn(async move {
                let client = WaveOnClient::new(snapshot);
                let result = match playlist_id {
                    Some(id) => client.update_playlist(id, &payload).await,
                    None => client.create_playlist(&payload).await,
                };
                saving.set(false);
                match result {
                    Ok(saved) => {
                        show_toast(toasts, "Playlist saved.", ToastKind::Info);
                        spawn_refresh_playlists(session, playlists);
                        navigation.navigate_to(AppView::PlaylistDetail(saved.id));
                    }
                    Err(err) => {
                        warn!("playlist save failed: {err}");
                        show_toast(toasts, "Could not save playlist.", ToastKind::Error);
                    }
                }
            });
        }
    };

    let songs = catalog();
    let selected_ids = selected();

    rsx! {
        div { class: "max-w-3xl space-y-6",
            h1 { class: "text-2xl font-bold text-white",
                if playlist_id.is_some() {
                    "Edit Playlist"
                } else {
                    "New Playlist"
                }
            }

            div { class: "space-y-4",
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Title" }
                    input {
                        r#type: "text",
                        value: "{title()}",
                        placeholder: "My playlist",
                        class: "w-full bg-zinc-900/80 border border-zinc-800 rounded-lg px-4 py-2.5 text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-violet-500/60",
                        oninput: move |e| title.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Description" }
                    textarea {
                        value: "{description()}",
                        placeholder: "What is this playlist about?",
                        class: "w-full bg-zinc-900/80 border border-zinc-800 rounded-lg px-4 py-2.5 text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-violet-500/60 resize-none h-20",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                div {
                    label { class: "block text-sm text-zinc-400 mb-1", "Cover image URL" }
                    input {
                        r#type: "text",
                        value: "{image_url()}",
                        placeholder: "https://…",
                        class: "w-full bg-zinc-900/80 border border-zinc-800 rounded-lg px-4 py-2.5 text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-violet-500/60",
                        oninput: move |e| image_url.set(e.value()),
                    }
                }
                div { class: "flex items-center gap-3",
                    button {
                        class: if is_public() { "px-4 py-2 rounded-full bg-violet-500/20 text-violet-400 text-sm font-medium flex items-center gap-2" } else { "px-4 py-2 rounded-full bg-zinc-800/50 text-zinc-400 hover:text-white text-sm font-medium transition-colors flex items-center gap-2" },
                        onclick: move |_| is_public.set(true),
                        Icon { name: "globe".to_string(), class: "w-4 h-4".to_string() }
                        "Public"
                    }
                    button {
                        class: if !is_public() { "px-4 py-2 rounded-full bg-violet-500/20 text-violet-400 text-sm font-medium flex items-center gap-2" } else { "px-4 py-2 rounded-full bg-zinc-800/50 text-zinc-400 hover:text-white text-sm font-medium transition-colors flex items-center gap-2" },
                        onclick: move |_| is_public.set(false),
                        Icon { name: "lock".to_string(), class: "w-4 h-4".to_string() }
                        "Private"
                    }
                }
            }

            section {
                h2 { class: "text-lg font-semibold text-white mb-3",
                    "Songs ({selected_ids.len()} selected)"
                }
                div { class: "max-h-96 overflow-y-auto space-y-1 rounded-xl border border-zinc-800/60 p-2",
                    for song in songs {
                        {
                            let checked = selected_ids.contains(&song.id);
                            let song_id = song.id;
                            rsx! {
                                label { class: "flex items-center gap-3 rounded-lg px-3 py-2 hover:bg-zinc-800/60 transition-colors cursor-pointer",
                                    input {
                                        r#type: "checkbox",
                                        checked,
                                        class: "accent-violet-500",
                                        onchange: move |_| {
                                            selected
                                                .with_mut(|ids| {
                                                    if let Some(pos) = ids.iter().position(|&id| id == song_id) {
                                                        ids.remove(pos);
                                                    } else {
                                                        ids.push(song_id);
                                                    }
                                                });
                                        },
                                    }
                                    div { class: "min-w-0",
                                        p { class: "text-sm text-white truncate", "{song.name}" }
                                        p { class: "text-xs text-zinc-400 truncate", "{song.artist_name()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "flex items-center gap-3",
                button {
                    class: "px-6 py-2.5 rounded-full bg-violet-500 text-white text-sm font-semibold hover:bg-violet-400 transition-colors disabled:opacity-50",
                    disabled: saving(),
                    onclick: on_save,
                    if saving() {
                        "Saving…"
                    } else {
                        "Save"
                    }
                }
                button {
                    class: "px-6 py-2.5 rounded-full bg-zinc-800 text-sm text-zinc-300 hover:text-white transition-colors",
                    onclick: {
                        let navigation = navigation.clone();
                        move |_| navigation.navigate_to(AppView::Library)
                    },
                    "Cancel"
                }
            }
        }
    }
}
