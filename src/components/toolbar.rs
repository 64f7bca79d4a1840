use dioxus::prelude::*;

use crate::components::{
    view_label, AppView, Icon, Navigation, SearchQuerySignal, StudyPickerSignal, ToastKind,
    ToastSignal,
};
use crate::components::{show_toast, QueueSignal};
use crate::session::AuthSession;
use crate::study::StudyState;
use crate::util::format_countdown;

#[component]
pub fn Toolbar() -> Element {
    let session = use_context::<Signal<AuthSession>>();
    let navigation = use_context::<Navigation>();
    let mut search_query = use_context::<SearchQuerySignal>().0;
    let mut study_state = use_context::<Signal<StudyState>>();
    let mut study_picker_open = use_context::<StudyPickerSignal>().0;
    let toasts = use_context::<ToastSignal>().0;
    let catalog = use_context::<crate::components::CatalogSignal>().0;
    let mut queue = use_context::<QueueSignal>().0;

    let view = navigation.current();
    let study = study_state();

    let on_search = {
        let navigation = navigation.clone();
        move |e: Event<FormData>| {
            let value = e.value();
            // Jump off an artist page first; Home navigation clears the
            // query signal, so write the typed value after.
            navigation.search_entered(&value);
            search_query.set(value);
        }
    };

    let on_study_click = move |_| {
        if !study_state.peek().is_active {
            study_picker_open.set(true);
        }
    };

    let on_give_up = move |_| {
        study_state.write().give_up();
        queue.set(catalog.peek().clone());
        show_toast(toasts, "Study session ended.", ToastKind::Info);
    };

    let on_profile = {
        let navigation = navigation.clone();
        move |_| {
            let snapshot = session.peek().clone();
            match snapshot.user_id {
                Some(user_id) => navigation.navigate_to(AppView::Profile(user_id)),
                None => show_toast(toasts, "Sign in to open your profile.", ToastKind::Error),
            }
        }
    };

    rsx! {
        header { class: "border-b border-zinc-800/60 bg-zinc-950/80 backdrop-blur-xl",
            div { class: "flex items-center gap-4 px-6 py-3",
                span { class: "text-sm font-semibold text-white w-28", "{view_label(&view)}" }

                div { class: "flex-1 max-w-xl relative",
                    Icon {
                        name: "search".to_string(),
                        class: "w-4 h-4 text-zinc-500 absolute left-3 top-1/2 -translate-y-1/2".to_string(),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Search songs or artists",
                        value: "{search_query()}",
                        class: "w-full bg-zinc-900/80 border border-zinc-800 rounded-full pl-9 pr-4 py-2 text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-violet-500/60",
                        oninput: on_search,
                    }
                }

                if study.is_active {
                    div { class: "flex items-center gap-2 rounded-full bg-violet-500/15 border border-violet-500/35 px-3 py-1.5",
                        Icon { name: "clock".to_string(), class: "w-4 h-4 text-violet-300".to_string() }
                        span { class: "text-xs font-mono text-violet-200",
                            "{study.phase.label()} {format_countdown(study.time_left)}"
                        }
                        button {
                            class: "text-zinc-400 hover:text-white transition-colors",
                            aria_label: "End study session",
                            onclick: on_give_up,
                            Icon { name: "x".to_string(), class: "w-3.5 h-3.5".to_string() }
                        }
                    }
                } else {
                    button {
                        class: "p-2 rounded-lg text-zinc-400 hover:text-white hover:bg-zinc-800/60 transition-colors",
                        aria_label: "Start study session",
                        onclick: on_study_click,
                        Icon { name: "clock".to_string(), class: "w-5 h-5".to_string() }
                    }
                }

                button {
                    class: "p-2 rounded-lg text-zinc-400 hover:text-white hover:bg-zinc-800/60 transition-colors",
                    aria_label: "Open profile",
                    onclick: on_profile,
                    Icon { name: "user".to_string(), class: "w-5 h-5".to_string() }
                }
            }
        }
    }
}
