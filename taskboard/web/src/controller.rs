//! Glue between the pure board state in `taskboard_core` and Dioxus signals.
//!
//! Components never call the API directly: they go through [`BoardController`],
//! which runs the matching effect and feeds the resulting action back into the
//! [`BoardState`] signal.
use dioxus::prelude::*;
use taskboard_core::board::effects;
use taskboard_core::client::HttpTaskApi;
use taskboard_core::{BoardAction, BoardState, Task, TaskDraft, TaskId, TaskStatus};

#[derive(Clone, Copy)]
pub struct BoardController {
    state: Signal<BoardState>,
    api: Signal<HttpTaskApi>,
}

/// Creates the board for the current component and loads the task list on mount.
pub fn use_board() -> BoardController {
    let client = use_context::<HttpTaskApi>();
    let state = use_signal(BoardState::default);
    let api = use_signal(move || client);
    let controller = BoardController { state, api };

    use_effect(move || controller.load());

    controller
}

impl BoardController {
    /// Current state. Reading it subscribes the calling component to changes.
    pub fn snapshot(&self) -> BoardState {
        self.state.read().clone()
    }

    pub fn dispatch(&mut self, action: BoardAction) {
        tracing::debug!(?action, "Applying board action");
        self.state.write().apply(action);
    }

    fn client(&self) -> HttpTaskApi {
        self.api.peek().clone()
    }

    pub fn load(&self) {
        let mut this = *self;
        this.dispatch(BoardAction::LoadStarted);
        spawn(async move {
            let action = effects::load(&this.client()).await;
            this.dispatch(action);
        });
    }

    /// Sends the form: creates a task, or updates the one being edited.
    pub fn submit(&self, draft: TaskDraft) {
        let mut this = *self;
        let editing = self.state.peek().editing_id();
        spawn(async move {
            let action = effects::submit(&this.client(), editing, draft).await;
            this.dispatch(action);
        });
    }

    pub fn change_status(&self, id: TaskId, status: TaskStatus) {
        let mut this = *self;
        spawn(async move {
            let action = effects::change_status(&this.client(), id, status).await;
            this.dispatch(action);
        });
    }

    /// Deletes the task awaiting confirmation. Does nothing if none is pending.
    pub fn confirm_delete(&self) {
        let Some(id) = self.state.peek().pending_delete else {
            return;
        };
        let mut this = *self;
        spawn(async move {
            let action = effects::confirm_delete(&this.client(), id).await;
            this.dispatch(action);
        });
    }

    pub fn request_delete(&mut self, id: TaskId) {
        self.dispatch(BoardAction::RequestDelete(id));
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch(BoardAction::CancelDelete);
    }

    pub fn open_create_form(&mut self) {
        self.dispatch(BoardAction::OpenCreateForm);
    }

    pub fn open_edit_form(&mut self, task: Task) {
        self.dispatch(BoardAction::OpenEditForm(task));
    }

    pub fn close_form(&mut self) {
        self.dispatch(BoardAction::CloseForm);
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(BoardAction::DismissError);
    }
}
