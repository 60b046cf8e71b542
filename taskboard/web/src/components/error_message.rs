use dioxus::prelude::*;

/// Dismissible banner for the last failed action.
#[component]
pub fn ErrorMessage(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "bg-red-50 border border-red-200 rounded-lg p-4 flex items-center justify-between",
            role: "alert",
            p { class: "text-red-600", "{message}" }
            button {
                r#type: "button",
                class: "ml-4 text-red-500 hover:text-red-700 font-bold",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
