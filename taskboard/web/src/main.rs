use dioxus::prelude::*;
use taskboard_core::client::HttpTaskApi;

mod components;
mod controller;
mod views;

use views::TaskBoard;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";

/// Where the task API lives. Override at build time with `TASKBOARD_API_URL`.
const API_BASE_URL: &str = match option_env!("TASKBOARD_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| HttpTaskApi::new(API_BASE_URL));

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        TaskBoard {}
    }
}
