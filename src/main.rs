#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod api;
mod components;
mod playback;
mod search;
mod session;
mod study;
mod util;

use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        components::AppShell {}
    }
}
