use dioxus::html::FileData;
use dioxus::prelude::*;
use tracing::error;

use crate::api::client::{SongUpload, WaveOnClient};
use crate::components::{
    show_toast, CatalogSignal, Icon, QueueSignal, SearchQuerySignal, ToastKind, ToastSignal,
};
use crate::session::AuthSession;

/// Upload form for artist accounts. The backend rejects uploads from
/// non-artist users with 401/403, which we surface as a role hint.
#[component]
pub fn ArtistStudioView() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let mut catalog = use_context::<CatalogSignal>().0;
    let mut queue = use_context::<QueueSignal>().0;
    let search_query = use_context::<SearchQuerySignal>().0;
    let toasts = use_context::<ToastSignal>().0;

    let mut name = use_signal(String::new);
    let mut genre = use_signal(String::new);
    let mut image_file = use_signal(|| None::<FileData>);
    let mut audio_file = use_signal(|| None::<FileData>);
    let mut uploading = use_signal(|| false);

    let on_submit = move |e: Event<FormData>| {
        e.prevent_default();
        if *uploading.peek() {
            return;
        }
        let song_name = name.peek().trim().to_string();
        let song_genre = genre.peek().trim().to_uppercase();
        if song_name.is_empty() || song_genre.is_empty() {
            show_toast(toasts, "Name and genre are required", ToastKind::Error);
            return;
        }
        let Some(image) = image_file.peek().clone() else {
            show_toast(toasts, "Pick a cover image", ToastKind::Error);
            return;
        };
        let Some(audio) = audio_file.peek().clone() else {
            show_toast(toasts, "Pick an audio file", ToastKind::Error);
            return;
        };
        let auth = session.peek().clone();

        uploading.set(true);
        spawn(async move {
            let published_name = song_name.clone();
            let result = async {
                let image_bytes = image
                    .read_bytes()
                    .await
                    .map_err(|e| format!("could not read cover image: {e}"))?;
                let audio_bytes = audio
                    .read_bytes()
                    .await
                    .map_err(|e| format!("could not read audio file: {e}"))?;
                let client = WaveOnClient::new(auth);
                client
                    .upload_song(SongUpload {
                        name: song_name,
                        genre: song_genre,
                        image_name: image.name(),
                        image_bytes: image_bytes.to_vec(),
                        audio_name: audio.name(),
                        audio_bytes: audio_bytes.to_vec(),
                    })
                    .await
            }
            .await;

            match result {
                Ok(()) => {
                    show_toast(
                        toasts,
                        format!("\"{published_name}\" published"),
                        ToastKind::Info,
                    );
                    name.set(String::new());
                    genre.set(String::new());
                    image_file.set(None);
                    audio_file.set(None);
                    // Refresh the catalog so the new track shows up immediately.
                    let client = WaveOnClient::new(session.peek().clone());
                    match client.get_songs().await {
                        Ok(songs) => {
                            catalog.set(songs.clone());
                            if search_query.peek().trim().is_empty() {
                                queue.set(songs);
                            }
                        }
                        Err(err) => error!("catalog refresh after upload failed: {err}"),
                    }
                }
                Err(err) => {
                    error!("song upload failed: {err}");
                    show_toast(toasts, err, ToastKind::Error);
                }
            }
            uploading.set(false);
        });
    };

    rsx! {
        div { class: "max-w-2xl space-y-6",
            header {
                h1 { class: "text-3xl font-bold text-white", "Artist Studio" }
                p { class: "text-sm text-zinc-400 mt-1",
                    "Publish a new track to the WaveOn catalog"
                }
            }

            form {
                class: "space-y-5 rounded-2xl bg-zinc-900/60 border border-zinc-800/60 p-6",
                onsubmit: on_submit,

                div {
                    label { class: "block text-sm font-medium text-zinc-300 mb-1.5", "Track name" }
                    input {
                        r#type: "text",
                        class: "w-full rounded-lg bg-zinc-800 border border-zinc-700 px-3 py-2 text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-violet-500",
                        placeholder: "Midnight Drive",
                        value: "{name}",
                        oninput: move |e: Event<FormData>| name.set(e.value()),
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-zinc-300 mb-1.5", "Genre" }
                    input {
                        r#type: "text",
                        class: "w-full rounded-lg bg-zinc-800 border border-zinc-700 px-3 py-2 text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-violet-500",
                        placeholder: "SYNTHWAVE",
                        value: "{genre}",
                        oninput: move |e: Event<FormData>| genre.set(e.value()),
                    }
                }

                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    div {
                        label { class: "block text-sm font-medium text-zinc-300 mb-1.5", "Cover image" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            class: "w-full text-sm text-zinc-400 file:mr-3 file:rounded-full file:border-0 file:bg-zinc-800 file:px-4 file:py-1.5 file:text-sm file:text-white",
                            onchange: move |e: Event<FormData>| {
                                image_file.set(e.files().into_iter().next());
                            },
                        }
                        if let Some(file) = image_file() {
                            p { class: "text-xs text-violet-400 mt-1 truncate", "{file.name()}" }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-zinc-300 mb-1.5", "Audio file" }
                        input {
                            r#type: "file",
                            accept: "audio/*",
                            class: "w-full text-sm text-zinc-400 file:mr-3 file:rounded-full file:border-0 file:bg-zinc-800 file:px-4 file:py-1.5 file:text-sm file:text-white",
                            onchange: move |e: Event<FormData>| {
                                audio_file.set(e.files().into_iter().next());
                            },
                        }
                        if let Some(file) = audio_file() {
                            p { class: "text-xs text-violet-400 mt-1 truncate", "{file.name()}" }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    disabled: uploading(),
                    class: "w-full flex items-center justify-center gap-2 rounded-full bg-violet-500 px-5 py-2.5 text-sm font-semibold text-white hover:bg-violet-400 transition-colors disabled:opacity-50",
                    if uploading() {
                        Icon { name: "loader".to_string(), class: "w-4 h-4 animate-spin".to_string() }
                        "Uploading..."
                    } else {
                        Icon { name: "upload".to_string(), class: "w-4 h-4".to_string() }
                        "Publish"
                    }
                }
            }
        }
    }
}
