use dioxus::prelude::*;
use taskboard_core::{Task, TaskDraft, TaskStatus};

/// Create/edit form. Prefilled from `editing` when set, blank otherwise.
#[component]
pub fn TaskForm(
    editing: Option<Task>,
    on_submit: EventHandler<TaskDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let is_editing = editing.is_some();
    let initial = editing.as_ref().map(TaskDraft::from_task).unwrap_or_default();
    let mut title = use_signal(|| initial.title.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut status = use_signal(|| initial.status);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let trimmed = title().trim().to_string();

        if trimmed.is_empty() {
            error.set(Some("Please enter a title".to_string()));
            return;
        }

        error.set(None);
        on_submit.call(TaskDraft {
            title: trimmed,
            description: description(),
            status: status(),
        });
    };

    let handle_title_input = move |evt: FormEvent| {
        title.set(evt.value());
        if error().is_some() {
            error.set(None);
        }
    };

    rsx! {
        div { class: "bg-white rounded-lg shadow p-6",
            h2 { class: "text-2xl font-bold text-gray-900 mb-4",
                if is_editing { "Edit Task" } else { "New Task" }
            }

            form { onsubmit: handle_submit, class: "space-y-4",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", r#for: "task-title", "Title" }
                    input {
                        id: "task-title",
                        r#type: "text",
                        placeholder: "What needs to be done?",
                        value: "{title}",
                        oninput: handle_title_input,
                        class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        required: true,
                        autofocus: true,
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", r#for: "task-description", "Description" }
                    textarea {
                        id: "task-description",
                        rows: 3,
                        placeholder: "Optional details",
                        value: "{description}",
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                        class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-1", r#for: "task-status", "Status" }
                    select {
                        id: "task-status",
                        class: "w-full px-4 py-2 border border-gray-300 rounded-lg",
                        onchange: move |evt: FormEvent| {
                            if let Ok(selected) = evt.value().parse::<TaskStatus>() {
                                status.set(selected);
                            }
                        },
                        for option_status in TaskStatus::ALL {
                            option {
                                value: option_status.as_str(),
                                selected: option_status == status(),
                                {option_status.label()}
                            }
                        }
                    }
                }

                if let Some(error_msg) = error() {
                    div { class: "text-red-600 text-sm", "{error_msg}" }
                }

                div { class: "flex space-x-3",
                    button {
                        r#type: "submit",
                        class: "flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                        if is_editing { "Save Changes" } else { "Create Task" }
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
