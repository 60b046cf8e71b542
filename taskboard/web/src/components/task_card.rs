use dioxus::prelude::*;
use taskboard_core::{Task, TaskId, TaskStatus};

fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "status-pending",
        TaskStatus::InProgress => "status-in-progress",
        TaskStatus::Completed => "status-completed",
    }
}

/// A single task with its status selector and edit/delete buttons.
#[component]
pub fn TaskCard(
    task: Task,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<TaskId>,
    on_status_change: EventHandler<(TaskId, TaskStatus)>,
) -> Element {
    let id = task.id;
    let current = task.status;
    let badge_class = status_class(current);
    let created = task.created_at.format("%b %d, %Y %H:%M").to_string();
    let edited_task = task.clone();

    let handle_status_change = move |evt: FormEvent| match evt.value().parse::<TaskStatus>() {
        Ok(status) if status != current => on_status_change.call((id, status)),
        Ok(_) => {}
        Err(err) => tracing::warn!("Ignoring status selection: {}", err),
    };

    rsx! {
        div { class: "bg-white rounded-lg shadow p-6",
            div { class: "flex items-start justify-between",
                div { class: "space-y-1",
                    h3 { class: "text-lg font-semibold text-gray-900", "{task.title}" }
                    if let Some(description) = &task.description {
                        p { class: "text-gray-600", "{description}" }
                    }
                    p { class: "text-xs text-gray-400", "Created {created}" }
                }
                span { class: "px-3 py-1 rounded-full text-sm font-medium {badge_class}",
                    {current.label()}
                }
            }

            div { class: "mt-4 flex items-center space-x-3",
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-lg",
                    aria_label: "Status",
                    onchange: handle_status_change,
                    for status in TaskStatus::ALL {
                        option {
                            value: status.as_str(),
                            selected: status == current,
                            {status.label()}
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                    onclick: move |_| on_edit.call(edited_task.clone()),
                    "Edit"
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
