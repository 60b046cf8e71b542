use crate::entities::task;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;
use taskboard_core::{NewTask, Task, TaskChanges, TaskId};

pub mod api;

/// Shared state for the task routes.
#[derive(Clone, Debug)]
pub struct TaskState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

/// Error type for TaskService operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// Represents a task not found error.
    #[error("Task {0} not found")]
    TaskNotFound(TaskId),
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl From<task::Model> for Task {
    fn from(model: task::Model) -> Self {
        Task {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status.into(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Storage accessor for the `tasks` table.
pub struct TaskService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a sea_orm::DatabaseConnection) -> Self {
        TaskService { db }
    }

    /// Retrieves all tasks, newest first.
    ///
    /// Tasks created within the same instant are ordered by descending ID.
    #[tracing::instrument(skip(self))]
    pub async fn list_tasks(&self) -> Result<Vec<Task>, TaskServiceError> {
        let tasks = task::Entity::find()
            .order_by_desc(task::Column::CreatedAt)
            .order_by_desc(task::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Task::from)
            .collect();
        Ok(tasks)
    }

    /// Retrieves a task by its ID.
    ///
    /// # Returns
    ///
    /// The `Task`, or `TaskServiceError::TaskNotFound` if no row has this ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_task(&self, id: TaskId) -> Result<Task, TaskServiceError> {
        let model = task::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(id))?;
        Ok(Task::from(model))
    }

    /// Creates a new task.
    ///
    /// The returned task is the row as stored, including the generated ID and
    /// timestamps.
    #[tracing::instrument(skip(self))]
    pub async fn create_task(&self, new_task: NewTask) -> Result<Task, TaskServiceError> {
        let active_model = task::ActiveModel {
            title: ActiveValue::Set(new_task.title),
            description: ActiveValue::Set(new_task.description),
            status: ActiveValue::Set(new_task.status.into()),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        tracing::info!("Created task {}", created_model.id);
        Ok(Task::from(created_model))
    }

    /// Merges `changes` into an existing task and refreshes `updated_at`.
    ///
    /// Fields not present in `changes` keep their stored values. The merge and
    /// the timestamp happen in a single `UPDATE ... RETURNING` so a row deleted
    /// concurrently is reported as not found, and `updated_at` comes from the
    /// same database clock as `created_at`.
    #[tracing::instrument(skip(self))]
    pub async fn update_task(
        &self,
        id: TaskId,
        changes: TaskChanges,
    ) -> Result<Task, TaskServiceError> {
        let mut active_model = <task::ActiveModel as std::default::Default>::default();
        if let Some(title) = changes.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(status) = changes.status {
            active_model.status = ActiveValue::Set(status.into());
        }

        let updated_model = task::Entity::update_many()
            .set(active_model)
            .col_expr(task::Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(task::Column::Id.eq(id))
            .exec_with_returning(self.db)
            .await?
            .into_iter()
            .next()
            .ok_or(TaskServiceError::TaskNotFound(id))?;

        Ok(Task::from(updated_model))
    }

    /// Deletes a task by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn delete_task(&self, id: TaskId) -> Result<(), TaskServiceError> {
        let result = task::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            tracing::warn!("Failed to delete task {}: not found", id);
            return Err(TaskServiceError::TaskNotFound(id));
        }
        Ok(())
    }
}
