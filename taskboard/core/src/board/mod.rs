//! Client-side state of the task board.
//!
//! [`BoardState`] is a plain state container: every change goes through
//! [`BoardState::apply`] with a [`BoardAction`], so transitions can be tested
//! without rendering anything. The async functions in [`effects`] perform the
//! API calls and return the action to apply once the call settles.
use crate::task::{Task, TaskId, TaskStatus};

pub mod effects;

/// Which user action failed, used to pick the banner shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Load,
    Create,
    Update,
    Delete,
}

impl Failure {
    /// Fixed, user-facing message for the failure. The technical error is only logged.
    pub fn message(&self) -> &'static str {
        match self {
            Failure::Load => "Failed to load tasks. Please try again later.",
            Failure::Create => "Failed to create task. Please try again.",
            Failure::Update => "Failed to update task. Please try again.",
            Failure::Delete => "Failed to delete task. Please try again.",
        }
    }
}

/// Values captured by the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Prefills a draft from an existing task, for editing.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
        }
    }

    /// The description to send, with a blank field meaning "no description".
    pub fn description(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    LoadStarted,
    Loaded(Vec<Task>),
    Created(Task),
    /// The edit form was submitted and the server stored the task.
    Saved(Task),
    /// A task changed outside the form, e.g. from the status selector on its card.
    Updated(Task),
    Deleted(TaskId),
    Failed(Failure),
    OpenCreateForm,
    OpenEditForm(Task),
    CloseForm,
    RequestDelete(TaskId),
    CancelDelete,
    DismissError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    /// Tasks in the order the server returned them, newest first.
    pub tasks: Vec<Task>,
    pub loading: bool,
    /// Banner message for the last failed action.
    pub error: Option<String>,
    pub form_visible: bool,
    /// Task being edited when the form is open in edit mode.
    pub editing: Option<Task>,
    /// Task waiting for the user to confirm its deletion.
    pub pending_delete: Option<TaskId>,
}

impl BoardState {
    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            BoardAction::Loaded(tasks) => {
                self.tasks = tasks;
                self.loading = false;
            }
            BoardAction::Created(task) => {
                self.tasks.insert(0, task);
                self.close_form();
            }
            BoardAction::Saved(task) => {
                self.replace(task);
                self.close_form();
            }
            BoardAction::Updated(task) => self.replace(task),
            BoardAction::Deleted(id) => {
                self.tasks.retain(|task| task.id != id);
                if self.editing.as_ref().is_some_and(|edited| edited.id == id) {
                    self.close_form();
                }
                self.pending_delete = None;
            }
            BoardAction::Failed(failure) => {
                self.error = Some(failure.message().to_string());
                self.loading = false;
                if failure == Failure::Delete {
                    self.pending_delete = None;
                }
            }
            BoardAction::OpenCreateForm => {
                self.form_visible = true;
                self.editing = None;
            }
            BoardAction::OpenEditForm(task) => {
                self.form_visible = true;
                self.editing = Some(task);
            }
            BoardAction::CloseForm => self.close_form(),
            BoardAction::RequestDelete(id) => self.pending_delete = Some(id),
            BoardAction::CancelDelete => self.pending_delete = None,
            BoardAction::DismissError => self.error = None,
        }
    }

    /// Id of the task being edited, if the form is in edit mode.
    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing.as_ref().map(|task| task.id)
    }

    /// The task awaiting delete confirmation, if it is still on the board.
    pub fn pending_delete_task(&self) -> Option<&Task> {
        let id = self.pending_delete?;
        self.tasks.iter().find(|task| task.id == id)
    }

    fn replace(&mut self, task: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task;
        }
    }

    fn close_form(&mut self) {
        self.form_visible = false;
        self.editing = None;
    }
}
