//! Audio playback glue.
//!
//! The UI never talks to the `<audio>` element directly. It writes the
//! shared signals (now playing, is playing, volume) and the controller
//! component below mirrors them onto a single hidden audio element,
//! polls playback progress back into [`AudioState`], and advances the
//! queue when a track ends.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
use crate::api::models::Song;
#[cfg(target_arch = "wasm32")]
use crate::api::WaveOnClient;
#[cfg(target_arch = "wasm32")]
use crate::playback::{ended_next, RepeatMode};
#[cfg(target_arch = "wasm32")]
use crate::session::AuthSession;

/// Playback progress shared across renders.
#[derive(Clone)]
pub struct AudioState {
    pub current_time: Signal<f64>,
    pub duration: Signal<f64>,
    pub playback_error: Signal<Option<String>>,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            current_time: Signal::new(0.0),
            duration: Signal::new(0.0),
            playback_error: Signal::new(None),
        }
    }
}

/// Cross-target one-shot timer for polling loops and countdowns.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id("waveon-audio") {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id("waveon-audio");
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
fn web_try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn defer_signal_update<F>(f: F)
where
    F: FnOnce() + 'static,
{
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        f();
    });
}

/// Jump the audio element to an absolute position in seconds.
#[cfg(target_arch = "wasm32")]
pub fn seek_to(position: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        audio.set_current_time(position.max(0.0));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(_position: f64) {}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    use crate::components::{PlaybackPositionSignal, QueueSignal, ShuffleSignal, VolumeSignal};

    let session = use_context::<Signal<AuthSession>>();
    let queue = use_context::<QueueSignal>().0;
    let mut now_playing = use_context::<Signal<Option<Song>>>();
    let mut is_playing = use_context::<Signal<bool>>();
    let volume = use_context::<VolumeSignal>().0;
    let repeat_mode = use_context::<Signal<RepeatMode>>();
    let shuffle_enabled = use_context::<ShuffleSignal>().0;
    let playback_position = use_context::<PlaybackPositionSignal>().0;
    let audio_state = use_context::<Signal<AudioState>>();

    let mut last_src = use_signal(|| None::<String>);

    // One-time setup: create the element and poll progress/ended state.
    {
        let audio_state = audio_state.clone();
        use_effect(move || {
            let Some(_audio) = get_or_create_audio_element() else {
                return;
            };

            let mut current_time_signal = audio_state.peek().current_time;
            let mut duration_signal = audio_state.peek().duration;
            let mut playback_pos = playback_position.clone();
            let queue = queue.clone();
            let mut now_playing = now_playing.clone();
            let mut is_playing = is_playing.clone();
            let repeat_mode = repeat_mode.clone();
            let shuffle_enabled = shuffle_enabled.clone();

            spawn(async move {
                let mut last_emit = 0.0f64;
                let mut last_duration = -1.0f64;
                let mut ended_for_song: Option<i64> = None;

                loop {
                    sleep_ms(200).await;

                    let Some(audio) = get_or_create_audio_element() else {
                        continue;
                    };

                    let time = audio.current_time();
                    if (time - last_emit).abs() >= 0.2 {
                        last_emit = time;
                        current_time_signal.set(time);
                        playback_pos.set(time);
                    }

                    let dur = audio.duration();
                    if !dur.is_nan() && (dur - last_duration).abs() > 0.5 {
                        last_duration = dur;
                        duration_signal.set(dur);
                    }

                    if !audio.ended() {
                        ended_for_song = None;
                        continue;
                    }

                    let current = now_playing.peek().clone();
                    let current_id = current.as_ref().map(|s| s.id);
                    if ended_for_song == current_id {
                        continue;
                    }
                    ended_for_song = current_id;

                    let repeat = *repeat_mode.peek();
                    if repeat == RepeatMode::One {
                        audio.set_current_time(0.0);
                        web_try_play(&audio);
                        continue;
                    }

                    let queue_snapshot = queue.peek().clone();
                    let Some(current) = current else {
                        is_playing.set(false);
                        continue;
                    };

                    let advance =
                        ended_next(&queue_snapshot, Some(&current), *shuffle_enabled.peek());

                    match advance {
                        Some(song) => now_playing.set(Some(song)),
                        None => is_playing.set(false),
                    }
                }
            });
        });
    }

    // Track changes: point the element at the new stream and keep going.
    {
        let session = session.clone();
        let volume = volume.clone();
        let mut audio_state = audio_state.clone();
        let mut playback_position = playback_position.clone();
        use_effect(move || {
            let song = now_playing();

            let Some(song) = song else {
                if let Some(audio) = get_or_create_audio_element() {
                    let _ = audio.pause();
                    audio.set_src("");
                    let _ = audio.remove_attribute("src");
                }
                last_src.set(None);
                is_playing.set(false);
                audio_state.write().playback_error.set(None);
                return;
            };

            let client = WaveOnClient::new(session.peek().clone());
            let url = song
                .filepath
                .clone()
                .unwrap_or_else(|| client.stream_url(song.id));

            if Some(url.clone()) == *last_src.peek() {
                return;
            }
            last_src.set(Some(url.clone()));
            audio_state.write().playback_error.set(None);

            if let Some(audio) = get_or_create_audio_element() {
                audio.set_src(&url);
                audio.set_volume(volume.peek().clamp(0.0, 1.0));
                let mut audio_state = audio_state.clone();
                defer_signal_update(move || {
                    playback_position.set(0.0);
                    audio_state.write().current_time.set(0.0);
                });
                if *is_playing.peek() {
                    web_try_play(&audio);
                }
            }
        });
    }

    // Transport: mirror the is_playing signal onto the element.
    {
        let is_playing = is_playing.clone();
        use_effect(move || {
            let playing = is_playing();
            if let Some(audio) = get_or_create_audio_element() {
                if playing {
                    if audio.paused() {
                        web_try_play(&audio);
                    }
                } else if !audio.paused() {
                    let _ = audio.pause();
                }
            }
        });
    }

    // Volume changes.
    {
        let volume = volume.clone();
        use_effect(move || {
            let vol = volume().clamp(0.0, 1.0);
            if let Some(audio) = get_or_create_audio_element() {
                audio.set_volume(vol);
            }
        });
    }

    // Repeat is handled in the polling loop; never let the element loop.
    {
        let repeat_mode = repeat_mode.clone();
        use_effect(move || {
            let _ = repeat_mode();
            if let Some(audio) = get_or_create_audio_element() {
                audio.set_loop(false);
            }
        });
    }

    rsx! {}
}

/// Desktop builds render the UI without a playback backend.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}
