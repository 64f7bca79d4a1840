use dioxus::prelude::*;

use crate::components::{AppView, Icon, Navigation, PlaylistsSignal};

#[component]
pub fn Sidebar() -> Element {
    let navigation = use_context::<Navigation>();
    let playlists = use_context::<PlaylistsSignal>().0;
    let view = navigation.current();

    let nav_home = navigation.clone();
    let nav_explore = navigation.clone();
    let nav_library = navigation.clone();
    let nav_favorites = navigation.clone();
    let nav_galaxy = navigation.clone();
    let nav_create = navigation.clone();

    rsx! {
        aside { class: "w-64 bg-zinc-950/50 border-r border-zinc-800/50 flex flex-col h-full backdrop-blur-xl",
            // Logo
            div { class: "p-6 border-b border-zinc-800/50",
                div { class: "flex items-center gap-3",
                    div { class: "w-10 h-10 rounded-xl bg-gradient-to-br from-violet-500 to-fuchsia-600 flex items-center justify-center text-white font-bold text-lg shadow-lg shadow-violet-500/20",
                        "W"
                    }
                    div {
                        h1 { class: "text-lg font-bold text-white", "WaveOn" }
                        p { class: "text-xs text-zinc-500", "ride the wave" }
                    }
                }
            }

            // Navigation
            nav { class: "flex-1 overflow-y-auto p-4 space-y-1",
                div { class: "mb-6",
                    p { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider mb-3 px-3",
                        "Discover"
                    }
                    NavItem {
                        icon: "home",
                        label: "Home",
                        active: matches!(view, AppView::Home),
                        onclick: move |_| nav_home.navigate_to(AppView::Home),
                    }
                    NavItem {
                        icon: "compass",
                        label: "Explore",
                        active: matches!(view, AppView::Explore),
                        onclick: move |_| nav_explore.navigate_to(AppView::Explore),
                    }
                    NavItem {
                        icon: "galaxy",
                        label: "Galaxy",
                        active: matches!(view, AppView::Galaxy),
                        onclick: move |_| nav_galaxy.navigate_to(AppView::Galaxy),
                    }
                }

                div { class: "mb-6",
                    p { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider mb-3 px-3",
                        "Collection"
                    }
                    NavItem {
                        icon: "library",
                        label: "Library",
                        active: matches!(view, AppView::Library),
                        onclick: move |_| nav_library.navigate_to(AppView::Library),
                    }
                    NavItem {
                        icon: "heart",
                        label: "Favorites",
                        active: matches!(view, AppView::Favorites),
                        onclick: move |_| nav_favorites.navigate_to(AppView::Favorites),
                    }
                }

                // Playlists
                div { class: "mb-6",
                    div { class: "flex items-center justify-between mb-3 px-3",
                        p { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider",
                            "Playlists"
                        }
                        button {
                            class: "text-zinc-500 hover:text-white transition-colors",
                            aria_label: "Create playlist",
                            onclick: move |_| nav_create.navigate_to(AppView::PlaylistCreate),
                            Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                        }
                    }
                    for playlist in playlists() {
                        NavItem {
                            icon: "playlist",
                            label: playlist.title.clone(),
                            active: view == AppView::PlaylistDetail(playlist.id),
                            onclick: {
                                let navigation = navigation.clone();
                                let id = playlist.id;
                                move |_| navigation.open_playlist(id)
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base_class = "flex items-center gap-3 px-3 py-2.5 rounded-xl text-sm font-medium transition-all duration-200 cursor-pointer";
    let active_class = if active {
        "bg-gradient-to-r from-violet-500/20 to-fuchsia-500/10 text-violet-400 shadow-sm"
    } else {
        "text-zinc-400 hover:text-white hover:bg-zinc-800/50"
    };

    rsx! {
        button {
            class: "{base_class} {active_class} w-full",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-5 h-5 flex-shrink-0".to_string() }
            span { class: "truncate", "{label}" }
        }
    }
}
