//! API calls triggered by user intents on the board.
//!
//! Each function issues one request and returns the [`BoardAction`] to apply
//! when it settles. Failures are logged here and surface to the user only as
//! the fixed banner of the matching [`Failure`].
use super::{BoardAction, Failure, TaskDraft};
use crate::api::TaskApi;
use crate::request::{CreateTaskRequest, UpdateTaskRequest};
use crate::task::{Task, TaskId, TaskStatus};

/// Fetches every task for the initial render.
#[tracing::instrument(skip(api))]
pub async fn load<A: TaskApi + ?Sized>(api: &A) -> BoardAction {
    match api.list_tasks().await {
        Ok(tasks) => BoardAction::Loaded(tasks),
        Err(err) => {
            tracing::error!("Failed to load tasks: {}", err);
            BoardAction::Failed(Failure::Load)
        }
    }
}

/// Submits the form: creates a task, or replaces the fields of `editing` when set.
#[tracing::instrument(skip(api))]
pub async fn submit<A: TaskApi + ?Sized>(
    api: &A,
    editing: Option<TaskId>,
    draft: TaskDraft,
) -> BoardAction {
    match editing {
        None => {
            let request = CreateTaskRequest {
                title: Some(draft.title.clone()),
                description: draft.description(),
                status: Some(draft.status.to_string()),
            };
            match api.create_task(request).await {
                Ok(task) => BoardAction::Created(task),
                Err(err) => {
                    tracing::error!("Failed to create task: {}", err);
                    BoardAction::Failed(Failure::Create)
                }
            }
        }
        Some(id) => {
            let request = UpdateTaskRequest {
                title: Some(draft.title.clone()),
                description: Some(draft.description()),
                status: Some(draft.status.to_string()),
            };
            update(api, id, request, BoardAction::Saved).await
        }
    }
}

/// Moves a task to another status without touching its other fields.
#[tracing::instrument(skip(api))]
pub async fn change_status<A: TaskApi + ?Sized>(
    api: &A,
    id: TaskId,
    status: TaskStatus,
) -> BoardAction {
    update(api, id, UpdateTaskRequest::status_only(status), BoardAction::Updated).await
}

/// Deletes a task. Only call this once the user confirmed the deletion.
#[tracing::instrument(skip(api))]
pub async fn confirm_delete<A: TaskApi + ?Sized>(api: &A, id: TaskId) -> BoardAction {
    match api.delete_task(id).await {
        Ok(_) => BoardAction::Deleted(id),
        Err(err) => {
            tracing::error!("Failed to delete task {}: {}", id, err);
            BoardAction::Failed(Failure::Delete)
        }
    }
}

async fn update<A: TaskApi + ?Sized>(
    api: &A,
    id: TaskId,
    request: UpdateTaskRequest,
    on_success: fn(Task) -> BoardAction,
) -> BoardAction {
    match api.update_task(id, request).await {
        Ok(task) => on_success(task),
        Err(err) => {
            tracing::error!("Failed to update task {}: {}", id, err);
            BoardAction::Failed(Failure::Update)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClientError, MockTaskApi};
    use crate::board::tests::task;
    use crate::request::DeleteResponse;
    use mockall::predicate::eq;

    fn server_error() -> ClientError {
        ClientError::Status {
            status: 500,
            message: "connection refused".to_string(),
        }
    }

    #[tokio::test]
    async fn can_load_tasks() {
        let mut api = MockTaskApi::new();
        api.expect_list_tasks()
            .times(1)
            .returning(|| Ok(vec![task(2, "B"), task(1, "A")]));

        let action = load(&api).await;

        assert_eq!(action, BoardAction::Loaded(vec![task(2, "B"), task(1, "A")]));
    }

    #[tokio::test]
    async fn can_report_load_failure() {
        let mut api = MockTaskApi::new();
        api.expect_list_tasks()
            .times(1)
            .returning(|| Err(ClientError::Transport("offline".to_string())));

        let action = load(&api).await;

        assert_eq!(action, BoardAction::Failed(Failure::Load));
    }

    #[tokio::test]
    async fn can_create_task_from_draft() {
        let mut api = MockTaskApi::new();
        api.expect_create_task()
            .with(eq(CreateTaskRequest {
                title: Some("Buy milk".to_string()),
                description: None,
                status: Some("pending".to_string()),
            }))
            .times(1)
            .returning(|_| Ok(task(1, "Buy milk")));
        let draft = TaskDraft {
            title: "Buy milk".to_string(),
            ..Default::default()
        };

        let action = submit(&api, None, draft).await;

        assert_eq!(action, BoardAction::Created(task(1, "Buy milk")));
    }

    #[tokio::test]
    async fn can_report_create_failure() {
        let mut api = MockTaskApi::new();
        api.expect_create_task()
            .times(1)
            .returning(|_| Err(server_error()));

        let action = submit(&api, None, TaskDraft::default()).await;

        assert_eq!(action, BoardAction::Failed(Failure::Create));
    }

    #[tokio::test]
    async fn can_send_every_field_when_editing() {
        let mut api = MockTaskApi::new();
        api.expect_update_task()
            .withf(|id, request| {
                *id == 4
                    && request.title.as_deref() == Some("Walk dog")
                    && request.description == Some(Some("Twice".to_string()))
                    && request.status.as_deref() == Some("in-progress")
            })
            .times(1)
            .returning(|_, _| Ok(task(4, "Walk dog")));
        let draft = TaskDraft {
            title: "Walk dog".to_string(),
            description: "Twice".to_string(),
            status: TaskStatus::InProgress,
        };

        let action = submit(&api, Some(4), draft).await;

        assert_eq!(action, BoardAction::Saved(task(4, "Walk dog")));
    }

    #[tokio::test]
    async fn can_change_status_only() {
        let mut api = MockTaskApi::new();
        api.expect_update_task()
            .with(eq(7), eq(UpdateTaskRequest::status_only(TaskStatus::Completed)))
            .times(1)
            .returning(|_, _| {
                let mut completed = task(7, "Buy milk");
                completed.status = TaskStatus::Completed;
                Ok(completed)
            });

        let action = change_status(&api, 7, TaskStatus::Completed).await;

        let BoardAction::Updated(updated) = action else {
            panic!("expected an update, got {:?}", action);
        };
        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.title, "Buy milk");
    }

    #[tokio::test]
    async fn can_report_update_failure() {
        let mut api = MockTaskApi::new();
        api.expect_update_task()
            .times(1)
            .returning(|_, _| Err(server_error()));

        let action = change_status(&api, 7, TaskStatus::Completed).await;

        assert_eq!(action, BoardAction::Failed(Failure::Update));
    }

    #[tokio::test]
    async fn can_delete_task() {
        let mut api = MockTaskApi::new();
        api.expect_delete_task()
            .with(eq(3))
            .times(1)
            .returning(|_| {
                Ok(DeleteResponse {
                    message: "Task deleted successfully".to_string(),
                })
            });

        let action = confirm_delete(&api, 3).await;

        assert_eq!(action, BoardAction::Deleted(3));
    }

    #[tokio::test]
    async fn can_report_delete_failure() {
        let mut api = MockTaskApi::new();
        api.expect_delete_task().times(1).returning(|id| {
            Err(ClientError::Status {
                status: 404,
                message: format!("Task {} not found", id),
            })
        });

        let action = confirm_delete(&api, 3).await;

        assert_eq!(action, BoardAction::Failed(Failure::Delete));
    }
}
