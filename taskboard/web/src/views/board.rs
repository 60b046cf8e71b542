use crate::components::{
    ConfirmDialog, EmptyTasksState, ErrorMessage, Header, LoadingSpinner, TaskForm, TaskList,
};
use crate::controller::use_board;
use dioxus::prelude::*;

/// The single page of the app: header, error banner, form and task list.
#[component]
pub fn TaskBoard() -> Element {
    let mut board = use_board();
    let state = board.snapshot();
    let pending_delete = state.pending_delete_task().cloned();
    // A new key remounts the form so its fields are prefilled again.
    let form_key = match state.editing_id() {
        Some(id) => format!("edit-{id}"),
        None => "create".to_string(),
    };

    rsx! {
        Header { on_new_task: move |_| board.open_create_form() }
        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-4xl mx-auto px-6 space-y-6",
                if let Some(message) = state.error.clone() {
                    ErrorMessage { message, on_dismiss: move |_| board.dismiss_error() }
                }

                if state.form_visible {
                    TaskForm {
                        key: "{form_key}",
                        editing: state.editing.clone(),
                        on_submit: move |draft| board.submit(draft),
                        on_cancel: move |_| board.close_form(),
                    }
                }

                if state.loading {
                    LoadingSpinner { message: "Loading tasks...".to_string() }
                } else if state.tasks.is_empty() {
                    EmptyTasksState {}
                } else {
                    TaskList {
                        tasks: state.tasks.clone(),
                        on_edit: move |task| board.open_edit_form(task),
                        on_delete: move |id| board.request_delete(id),
                        on_status_change: move |(id, status)| board.change_status(id, status),
                    }
                }
            }
        }

        if let Some(task) = pending_delete {
            ConfirmDialog {
                title: "Delete task?".to_string(),
                message: format!("\"{}\" will be permanently deleted.", task.title),
                confirm_label: "Delete".to_string(),
                on_confirm: move |_| board.confirm_delete(),
                on_cancel: move |_| board.cancel_delete(),
            }
        }
    }
}
