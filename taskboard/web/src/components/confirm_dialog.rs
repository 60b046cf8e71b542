use dioxus::prelude::*;

/// Modal asking the user to confirm a destructive action.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-2xl font-bold text-gray-900 mb-4", "{title}" }
                p { class: "text-gray-600 mb-6", "{message}" }

                div { class: "flex space-x-3",
                    button {
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        class: "flex-1 px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors font-medium",
                        "{confirm_label}"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        class: "flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                        "Cancel"
                    }
                }
            }
        }
    }
}
