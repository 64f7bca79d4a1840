use dioxus::prelude::*;

use crate::components::audio::sleep_ms;

const TOAST_VISIBLE_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// One toast at a time; a newer toast replaces the old one and the old
/// dismiss timer is ignored via the sequence counter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    seq: u64,
    current: Option<Toast>,
}

#[derive(Clone, Copy)]
pub struct ToastSignal(pub Signal<ToastState>);

pub fn show_toast(mut slot: Signal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let message = message.into();
    let seq = {
        let mut state = slot.write();
        state.seq += 1;
        state.current = Some(Toast { message, kind });
        state.seq
    };
    spawn(async move {
        sleep_ms(TOAST_VISIBLE_MS).await;
        let mut state = slot.write();
        if state.seq == seq {
            state.current = None;
        }
    });
}

#[component]
pub fn ToastShelf() -> Element {
    let toasts = use_context::<ToastSignal>().0;
    let state = toasts();

    rsx! {
        if let Some(toast) = state.current {
            div { class: "fixed bottom-28 left-1/2 -translate-x-1/2 z-[70] pointer-events-none",
                div {
                    class: match toast.kind {
                        ToastKind::Info => {
                            "toast-enter rounded-lg border border-violet-500/35 bg-zinc-900/95 px-4 py-2 text-sm text-zinc-100 shadow-xl"
                        }
                        ToastKind::Error => {
                            "toast-enter rounded-lg border border-rose-500/35 bg-rose-500/10 px-4 py-2 text-sm text-rose-200 shadow-xl"
                        }
                    },
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_state_replaces_current() {
        let mut state = ToastState::default();
        state.seq += 1;
        state.current = Some(Toast {
            message: "first".into(),
            kind: ToastKind::Info,
        });
        state.seq += 1;
        state.current = Some(Toast {
            message: "second".into(),
            kind: ToastKind::Error,
        });
        assert_eq!(state.seq, 2);
        assert_eq!(state.current.as_ref().unwrap().message, "second");
    }
}
