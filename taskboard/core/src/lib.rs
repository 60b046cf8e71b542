//! Core domain models and client-side state logic for Taskboard.
pub mod api;
pub mod board;
#[cfg(feature = "client")]
pub mod client;
pub mod request;
pub mod task;

pub use api::{ClientError, TaskApi};
pub use board::{BoardAction, BoardState, Failure, TaskDraft};
pub use request::{
    CreateTaskRequest, DeleteResponse, ErrorResponse, NewTask, TaskChanges, UpdateTaskRequest,
    ValidationError,
};
pub use task::{Task, TaskId, TaskStatus};
