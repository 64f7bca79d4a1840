use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::{
    seek_to, spawn_toggle_like, AudioState, CatalogSignal, Icon, Navigation, PlaybackPositionSignal,
    QueueSignal, ShuffleSignal, ToastSignal, VolumeSignal,
};
use crate::playback::{next_song, previous_song, seek_target, shuffled_next, RepeatMode};
use crate::session::AuthSession;
use crate::util::{format_time, FALLBACK_COVER_URL};

#[component]
pub fn PlayerBar() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let catalog = use_context::<CatalogSignal>().0;
    let queue = use_context::<QueueSignal>().0;
    let now_playing = use_context::<Signal<Option<Song>>>();
    let mut volume = use_context::<VolumeSignal>().0;
    let navigation = use_context::<Navigation>();
    let audio_state = use_context::<Signal<AudioState>>();
    let mut playback_position = use_context::<PlaybackPositionSignal>().0;
    let toasts = use_context::<ToastSignal>().0;

    let current_song = now_playing();

    let current_time = (audio_state().current_time)();
    let duration = (audio_state().duration)();
    let playback_error = (audio_state().playback_error)();

    let cover_url = current_song
        .as_ref()
        .and_then(|s| s.image_url.clone())
        .unwrap_or_else(|| FALLBACK_COVER_URL.to_string());

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            volume.set((val / 100.0).clamp(0.0, 1.0));
        }
    };

    let on_seek = {
        let mut audio_state = audio_state.clone();
        move |e: Event<FormData>| {
            if let Ok(percent) = e.value().parse::<f64>() {
                if let Some(new_time) = seek_target(percent / 100.0, duration) {
                    playback_position.set(new_time);
                    audio_state.write().current_time.set(new_time);
                    seek_to(new_time);
                }
            }
        }
    };

    let on_like = {
        let song = current_song.clone();
        move |_| {
            if let Some(ref song) = song {
                spawn_toggle_like(session, song, catalog, queue, now_playing, toasts);
            }
        }
    };

    let on_artist_click = {
        let song = current_song.clone();
        let navigation = navigation.clone();
        move |_| {
            if let Some(artist_id) = song.as_ref().and_then(|s| s.artist_id()) {
                navigation.open_artist(artist_id);
            }
        }
    };

    let is_liked = current_song.as_ref().map(|s| s.is_liked).unwrap_or(false);

    rsx! {
        if let Some(message) = playback_error {
            div { class: "fixed left-0 right-0 bottom-24 px-6 z-[60] pointer-events-none",
                div { class: "rounded-lg border border-rose-500/35 bg-rose-500/10 px-3 py-2 text-center text-xs text-rose-200 shadow-lg",
                    "{message}"
                }
            }
        }
        div { class: "fixed bottom-0 left-0 right-0 h-24 bg-zinc-950/90 backdrop-blur-xl border-t border-zinc-800/60 z-50",
            div { class: "h-full flex items-center justify-between px-6 gap-8",
                // Now playing info
                div { class: "flex items-center gap-4 min-w-0 w-1/4",
                    {match &current_song {
                        Some(song) => rsx! {
                            img {
                                src: "{cover_url}",
                                alt: "{song.name}",
                                class: "w-14 h-14 rounded-lg object-cover bg-zinc-800 flex-shrink-0 shadow-lg",
                                loading: "lazy",
                            }
                            div { class: "min-w-0 flex-1",
                                p { class: "text-sm font-medium text-white truncate", "{song.name}" }
                                button {
                                    class: "text-xs text-zinc-400 truncate hover:text-white transition-colors cursor-pointer block text-left w-full",
                                    onclick: on_artist_click,
                                    "{song.artist_name()}"
                                }
                            }
                            button {
                                class: if is_liked { "p-2 text-violet-400 hover:text-violet-300 transition-colors flex-shrink-0" } else { "p-2 text-zinc-400 hover:text-violet-400 transition-colors flex-shrink-0" },
                                onclick: on_like,
                                Icon {
                                    name: if is_liked { "heart-filled".to_string() } else { "heart".to_string() },
                                    class: "w-5 h-5".to_string(),
                                }
                            }
                        },
                        None => rsx! {
                            div { class: "w-14 h-14 rounded-lg bg-zinc-800/50 flex items-center justify-center",
                                Icon { name: "music".to_string(), class: "w-6 h-6 text-zinc-600".to_string() }
                            }
                            div { class: "min-w-0 flex-1",
                                p { class: "text-sm text-zinc-500", "No track playing" }
                                p { class: "text-xs text-zinc-600", "Select a song to start" }
                            }
                        },
                    }}
                }

                // Transport controls
                div { class: "flex flex-col items-center gap-2 flex-1 max-w-2xl",
                    div { class: "flex items-center gap-4 justify-center",
                        ShuffleButton {}
                        PrevButton {}
                        PlayPauseButton {}
                        NextButton {}
                        RepeatButton {}
                    }
                    div { class: "flex items-center gap-3 w-full",
                        span { class: "text-xs text-zinc-500 w-10 text-right", "{format_time(current_time)}" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "100",
                            value: if duration > 0.0 { (current_time / duration * 100.0).round() as i32 } else { 0 },
                            class: "flex-1 cursor-pointer accent-violet-500",
                            oninput: on_seek,
                        }
                        span { class: "text-xs text-zinc-500 w-10", "{format_time(duration)}" }
                    }
                }

                // Volume
                div { class: "flex items-center w-1/4 justify-end gap-3",
                    input {
                        r#type: "range",
                        min: "0",
                        max: "100",
                        value: (volume() * 100.0).round() as i32,
                        class: "w-24 cursor-pointer accent-zinc-400",
                        oninput: on_volume_change,
                    }
                }
            }
        }
    }
}

/// Play/Pause button - completely isolated component
#[component]
fn PlayPauseButton() -> Element {
    let mut is_playing = use_context::<Signal<bool>>();
    let playing = is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "w-10 h-10 rounded-full bg-white flex items-center justify-center hover:scale-105 transition-transform shadow-lg",
            onclick: move |_| {
                let current = is_playing();
                is_playing.set(!current);
            },
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "w-5 h-5 text-black".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "w-5 h-5 text-black ml-0.5".to_string(),
                }
            }
        }
    }
}

/// Previous button - steps back through the queue, wrapping to the end.
#[component]
fn PrevButton() -> Element {
    let queue = use_context::<QueueSignal>().0;
    let mut now_playing = use_context::<Signal<Option<Song>>>();
    let mut is_playing = use_context::<Signal<bool>>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "p-2 text-zinc-300 hover:text-white transition-colors",
            onclick: move |_| {
                let was_playing = *is_playing.peek();
                let queue_list = queue.peek();
                let current = now_playing.peek().clone();
                if let Some(song) = previous_song(&queue_list, current.as_ref()) {
                    now_playing.set(Some(song));
                    if was_playing {
                        is_playing.set(true);
                    }
                }
            },
            Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Next button - steps forward, honoring repeat-one and shuffle.
#[component]
fn NextButton() -> Element {
    let queue = use_context::<QueueSignal>().0;
    let repeat_mode = use_context::<Signal<RepeatMode>>();
    let shuffle_enabled = use_context::<ShuffleSignal>().0;
    let mut now_playing = use_context::<Signal<Option<Song>>>();
    let mut is_playing = use_context::<Signal<bool>>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "p-2 text-zinc-300 hover:text-white transition-colors",
            onclick: move |_| {
                let was_playing = *is_playing.peek();
                if *repeat_mode.peek() == RepeatMode::One {
                    seek_to(0.0);
                    if was_playing {
                        is_playing.set(true);
                    }
                    return;
                }
                let queue_list = queue.peek();
                let current = now_playing.peek().clone();
                let next = if *shuffle_enabled.peek() {
                    shuffled_next(&queue_list, current.as_ref())
                } else {
                    next_song(&queue_list, current.as_ref())
                };
                if let Some(song) = next {
                    now_playing.set(Some(song));
                    if was_playing {
                        is_playing.set(true);
                    }
                }
            },
            Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Repeat button - completely isolated component
#[component]
fn RepeatButton() -> Element {
    let mut repeat_mode = use_context::<Signal<RepeatMode>>();
    let mode = repeat_mode();

    rsx! {
        button {
            id: "repeat-btn",
            r#type: "button",
            class: match mode {
                RepeatMode::Off => "p-2 text-zinc-400 hover:text-white transition-colors",
                RepeatMode::All | RepeatMode::One => {
                    "p-2 text-violet-400 hover:text-violet-300 transition-colors"
                }
            },
            onclick: move |_| {
                let next = repeat_mode().cycle();
                repeat_mode.set(next);
            },
            Icon {
                name: match mode {
                    RepeatMode::One => "repeat-1".to_string(),
                    _ => "repeat".to_string(),
                },
                class: "w-5 h-5".to_string(),
            }
        }
    }
}

/// Shuffle button - toggle shuffle mode
#[component]
fn ShuffleButton() -> Element {
    let mut shuffle_enabled = use_context::<ShuffleSignal>().0;
    let enabled = shuffle_enabled();

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            class: if enabled { "p-2 text-violet-400 hover:text-violet-300 transition-colors" } else { "p-2 text-zinc-400 hover:text-white transition-colors" },
            onclick: move |_| {
                let current = shuffle_enabled();
                shuffle_enabled.set(!current);
            },
            Icon { name: "shuffle".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}
