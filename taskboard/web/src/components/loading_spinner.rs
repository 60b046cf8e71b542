use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-12",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-blue-600" }
            p { class: "mt-4 text-gray-600", "{message}" }
        }
    }
}
