use super::task_card::TaskCard;
use dioxus::prelude::*;
use taskboard_core::{Task, TaskId, TaskStatus};

/// Renders tasks in the order given, newest first as the server returns them.
#[component]
pub fn TaskList(
    tasks: Vec<Task>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<TaskId>,
    on_status_change: EventHandler<(TaskId, TaskStatus)>,
) -> Element {
    rsx! {
        ul { class: "space-y-4",
            for task in tasks {
                li { key: "{task.id}",
                    TaskCard { task, on_edit, on_delete, on_status_change }
                }
            }
        }
    }
}

#[component]
pub fn EmptyTasksState() -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow p-8 text-center",
            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No tasks yet" }
            p { class: "text-gray-600", "Create your first task to get started." }
        }
    }
}
