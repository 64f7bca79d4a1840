use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::{spawn_study_queue, Icon, QueueSignal};
use crate::session::AuthSession;
use crate::study::{StudyPhase, StudyState, SESSION_PRESETS};
use crate::util::format_countdown;

#[derive(Clone, Copy)]
pub struct StudyPickerSignal(pub Signal<bool>);

/// Preset picker plus the fullscreen countdown while a session runs.
#[component]
pub fn StudyOverlay() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let mut study_state = use_context::<Signal<StudyState>>();
    let mut picker_open = use_context::<StudyPickerSignal>().0;
    let queue = use_context::<QueueSignal>().0;
    let now_playing = use_context::<Signal<Option<Song>>>();
    let is_playing = use_context::<Signal<bool>>();

    let study = study_state();

    rsx! {
        if picker_open() && !study.is_active {
            div { class: "fixed inset-0 bg-black/70 backdrop-blur-sm z-[80] flex items-center justify-center",
                div { class: "bg-zinc-900 border border-zinc-800 rounded-2xl p-8 w-96 shadow-2xl",
                    div { class: "flex items-center justify-between mb-6",
                        h2 { class: "text-lg font-bold text-white", "Study Session" }
                        button {
                            class: "text-zinc-400 hover:text-white transition-colors",
                            aria_label: "Close",
                            onclick: move |_| picker_open.set(false),
                            Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                        }
                    }
                    p { class: "text-sm text-zinc-400 mb-4",
                        "Pick a focus/break rhythm. Study tracks play while you focus; your music comes back on breaks."
                    }
                    div { class: "grid grid-cols-2 gap-3",
                        for (study_min , break_min) in SESSION_PRESETS {
                            button {
                                class: "rounded-xl border border-zinc-800 bg-zinc-800/40 px-4 py-3 text-left hover:border-violet-500/60 hover:bg-violet-500/10 transition-colors",
                                onclick: move |_| {
                                    study_state.set(StudyState::start(study_min, break_min));
                                    picker_open.set(false);
                                    spawn_study_queue(session, queue, now_playing, is_playing);
                                },
                                p { class: "text-sm font-semibold text-white", "{study_min} min focus" }
                                p { class: "text-xs text-zinc-400", "{break_min} min break" }
                            }
                        }
                    }
                }
            }
        }

        if study.is_active && study.phase == StudyPhase::Study {
            div { class: "fixed bottom-28 right-6 z-[65] pointer-events-none",
                div { class: "rounded-2xl border border-violet-500/35 bg-zinc-900/95 px-6 py-4 shadow-2xl text-center",
                    p { class: "text-xs uppercase tracking-widest text-violet-300 mb-1", "Focus" }
                    p { class: "text-3xl font-mono font-bold text-white",
                        "{format_countdown(study.time_left)}"
                    }
                }
            }
        }
    }
}
