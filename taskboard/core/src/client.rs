//! HTTP implementation of [`TaskApi`] on top of `reqwest`.
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::{ClientError, TaskApi};
use crate::request::{CreateTaskRequest, DeleteResponse, ErrorResponse, UpdateTaskRequest};
use crate::task::{Task, TaskId};

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Talks to the task API served under `{base_url}/api/tasks`.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/api/tasks/{}", self.base_url, id)
    }

    /// Parses a success body, or turns the error envelope into [`ClientError::Status`].
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    #[tracing::instrument(skip(self))]
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.client.get(self.tasks_url()).send().await?;
        Self::parse(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_task(&self, id: TaskId) -> Result<Task, ClientError> {
        let response = self.client.get(self.task_url(id)).send().await?;
        Self::parse(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn create_task(&self, request: CreateTaskRequest) -> Result<Task, ClientError> {
        let response = self
            .client
            .post(self.tasks_url())
            .json(&request)
            .send()
            .await?;
        Self::parse(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> Result<Task, ClientError> {
        let response = self
            .client
            .put(self.task_url(id))
            .json(&request)
            .send()
            .await?;
        Self::parse(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_task(&self, id: TaskId) -> Result<DeleteResponse, ClientError> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        Self::parse(response).await
    }
}
