use async_trait::async_trait;

use crate::request::{CreateTaskRequest, DeleteResponse, UpdateTaskRequest};
use crate::task::{Task, TaskId};

/// Failure of a single call to the task API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, CORS, ...).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Returns true when the server reported that the task does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

/// One method per operation of the task API.
///
/// Every call issues exactly one request and hands back the parsed body or the
/// failure unchanged; there is no retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError>;

    async fn get_task(&self, id: TaskId) -> Result<Task, ClientError>;

    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, ClientError>;

    async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> Result<Task, ClientError>;

    async fn delete_task(&self, id: TaskId) -> Result<DeleteResponse, ClientError>;
}
