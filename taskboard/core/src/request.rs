//! Request and response bodies exchanged with the task API, and the validated
//! inputs they are converted into before reaching storage.
use serde::{Deserialize, Deserializer, Serialize};

use crate::task::TaskStatus;

/// Reasons a request body is rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Invalid status '{0}', expected one of: pending, in-progress, completed")]
    InvalidStatus(String),
}

/// JSON body accepted by `POST /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct CreateTaskRequest {
    /// Required, must not be blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// One of `pending`, `in-progress`, `completed`; defaults to `pending`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreateTaskRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status.to_string());
        self
    }
}

/// JSON body accepted by `PUT /api/tasks/{id}`.
///
/// Fields left out are kept as they are. `description` may be sent as `null`
/// to clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateTaskRequest {
    /// An update that only moves the task to another status.
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            status: Some(status.to_string()),
            ..Default::default()
        }
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`,
/// via `#[serde(default)]`).
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Confirmation returned by `DELETE /api/tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeleteResponse {
    pub message: String,
}

/// Error envelope returned by every failing API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub error: String,
}

/// A validated task ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}

impl TryFrom<CreateTaskRequest> for NewTask {
    type Error = ValidationError;

    fn try_from(request: CreateTaskRequest) -> Result<Self, Self::Error> {
        let title = request
            .title
            .filter(|title| !title.trim().is_empty())
            .ok_or(ValidationError::MissingTitle)?;
        let status = request
            .status
            .map(|status| status.parse::<TaskStatus>())
            .transpose()?
            .unwrap_or_default();

        Ok(NewTask {
            title,
            description: request.description,
            status,
        })
    }
}

/// A validated set of changes to merge into an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
}

impl TryFrom<UpdateTaskRequest> for TaskChanges {
    type Error = ValidationError;

    fn try_from(request: UpdateTaskRequest) -> Result<Self, Self::Error> {
        if request
            .title
            .as_ref()
            .is_some_and(|title| title.trim().is_empty())
        {
            return Err(ValidationError::EmptyTitle);
        }
        let status = request.status.map(|status| status.parse::<TaskStatus>()).transpose()?;

        Ok(TaskChanges {
            title: request.title,
            description: request.description,
            status,
        })
    }
}
