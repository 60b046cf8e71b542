use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum TaskStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl From<taskboard_core::TaskStatus> for TaskStatus {
    fn from(status: taskboard_core::TaskStatus) -> Self {
        match status {
            taskboard_core::TaskStatus::Pending => TaskStatus::Pending,
            taskboard_core::TaskStatus::InProgress => TaskStatus::InProgress,
            taskboard_core::TaskStatus::Completed => TaskStatus::Completed,
        }
    }
}

impl From<TaskStatus> for taskboard_core::TaskStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => taskboard_core::TaskStatus::Pending,
            TaskStatus::InProgress => taskboard_core::TaskStatus::InProgress,
            TaskStatus::Completed => taskboard_core::TaskStatus::Completed,
        }
    }
}
