use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, PaginatorTrait};
use taskboard_core::{NewTask, TaskChanges, TaskStatus};
use taskboard_server::entities::task;
use taskboard_server::task::{TaskService, TaskServiceError};

mod common;

fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: None,
        status: TaskStatus::Pending,
    }
}

#[tokio::test]
async fn can_create_task() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);

    let created = task_service
        .create_task(NewTask {
            title: "Buy milk".to_string(),
            description: Some("Semi-skimmed".to_string()),
            status: TaskStatus::InProgress,
        })
        .await
        .expect("Failed to create task");

    assert!(created.id > 0);
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.description.as_deref(), Some("Semi-skimmed"));
    assert_eq!(created.status, TaskStatus::InProgress);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn can_get_created_task() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);
    let created = task_service
        .create_task(new_task("Buy milk"))
        .await
        .expect("Failed to create task");

    let fetched = task_service
        .get_task(created.id)
        .await
        .expect("Failed to get task");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn can_handle_get_when_task_not_found() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);

    let result = task_service.get_task(999).await;

    assert!(matches!(result, Err(TaskServiceError::TaskNotFound(999))));
}

#[tokio::test]
async fn can_list_tasks_newest_first() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);
    let mut created_ids = Vec::new();
    for title in ["T1", "T2", "T3"] {
        let task = task_service
            .create_task(new_task(title))
            .await
            .expect("Failed to create task");
        created_ids.push(task.id);
    }

    let tasks = task_service.list_tasks().await.expect("Failed to list tasks");

    let titles: Vec<&str> = tasks.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, vec!["T3", "T2", "T1"]);
    created_ids.reverse();
    let listed_ids: Vec<i32> = tasks.iter().map(|task| task.id).collect();
    assert_eq!(listed_ids, created_ids);
}

#[tokio::test]
async fn can_handle_empty_task_list() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);

    let tasks = task_service.list_tasks().await.expect("Failed to list tasks");

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn can_update_status_and_keep_other_fields() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);
    // Create the row directly using the entity ActiveModel
    let initial = task::ActiveModel {
        title: ActiveValue::Set("Buy milk".to_string()),
        description: ActiveValue::Set(Some("Semi-skimmed".to_string())),
        status: ActiveValue::Set(task::TaskStatus::Pending),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .expect("Failed to create task");

    let updated = task_service
        .update_task(
            initial.id,
            TaskChanges {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update task");

    assert_eq!(updated.id, initial.id);
    assert_eq!(updated.title, "Buy milk");
    assert_eq!(updated.description.as_deref(), Some("Semi-skimmed"));
    assert_eq!(updated.status, TaskStatus::Completed);
    assert!(updated.updated_at > updated.created_at);
    assert_eq!(updated.created_at, initial.created_at);
}

#[tokio::test]
async fn can_clear_description() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);
    let created = task_service
        .create_task(NewTask {
            description: Some("Semi-skimmed".to_string()),
            ..new_task("Buy milk")
        })
        .await
        .expect("Failed to create task");

    let updated = task_service
        .update_task(
            created.id,
            TaskChanges {
                title: Some("Buy oat milk".to_string()),
                description: Some(None),
                status: None,
            },
        )
        .await
        .expect("Failed to update task");

    assert_eq!(updated.title, "Buy oat milk");
    assert_eq!(updated.description, None);
    assert_eq!(updated.status, TaskStatus::Pending);
}

#[tokio::test]
async fn can_handle_update_when_task_not_found() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);

    let result = task_service
        .update_task(404, TaskChanges::default())
        .await;

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Task 404 not found");
    }
}

#[tokio::test]
async fn can_handle_update_when_row_vanishes_before_write() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);
    let created = task_service
        .create_task(new_task("Buy milk"))
        .await
        .expect("Failed to create task");
    // A BEFORE UPDATE trigger returning NULL makes Postgres skip the row,
    // exactly as if it had been deleted between lookup and write.
    state
        .db
        .execute_unprepared(
            "CREATE FUNCTION skip_task_update() RETURNS trigger AS $$ \
             BEGIN RETURN NULL; END; $$ LANGUAGE plpgsql; \
             CREATE TRIGGER skip_task_update BEFORE UPDATE ON tasks \
             FOR EACH ROW EXECUTE FUNCTION skip_task_update();",
        )
        .await
        .expect("Failed to install trigger");

    let result = task_service
        .update_task(
            created.id,
            TaskChanges {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::TaskNotFound(id)) if id == created.id
    ));
}

#[tokio::test]
async fn can_refresh_updated_at_on_empty_change_set() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);
    let created = task_service
        .create_task(new_task("Buy milk"))
        .await
        .expect("Failed to create task");

    let updated = task_service
        .update_task(created.id, TaskChanges::default())
        .await
        .expect("Failed to update task");

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn can_delete_task_once() {
    let state = common::setup().await.expect("Failed to setup test context");
    let task_service = TaskService::new(&state.db);
    let created = task_service
        .create_task(new_task("Buy milk"))
        .await
        .expect("Failed to create task");

    task_service
        .delete_task(created.id)
        .await
        .expect("Failed to delete task");
    let second_delete = task_service.delete_task(created.id).await;

    assert!(matches!(
        second_delete,
        Err(TaskServiceError::TaskNotFound(id)) if id == created.id
    ));
    let remaining = task::Entity::find()
        .count(&state.db)
        .await
        .expect("Failed to count tasks");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn can_reject_blank_title_in_storage() {
    let state = common::setup().await.expect("Failed to setup test context");

    let result = task::ActiveModel {
        title: ActiveValue::Set("  ".to_string()),
        status: ActiveValue::Set(task::TaskStatus::Pending),
        ..Default::default()
    }
    .insert(&state.db)
    .await;

    assert!(result.is_err());
}
