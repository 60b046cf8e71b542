use dioxus::prelude::*;

#[component]
pub fn Header(on_new_task: EventHandler<()>) -> Element {
    rsx! {
        header { class: "bg-white shadow",
            div { class: "max-w-4xl mx-auto px-6 py-4 flex items-center justify-between",
                h1 { class: "text-3xl font-bold text-gray-800", "Taskboard" }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                    onclick: move |_| on_new_task.call(()),
                    "New Task"
                }
            }
        }
    }
}
