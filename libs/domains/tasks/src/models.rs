use axum_helpers::FieldUpdate;
use axum_helpers::errors::not_blank;
use axum_helpers::fields::null_as_empty;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use validator::Validate;

/// Task lifecycle status. Any status may move to any other.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not started
    #[default]
    #[sea_orm(string_value = "TODO")]
    Todo,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "DONE")]
    Done,
}

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    /// Fixed at creation
    pub project_id: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Insert payload handed to the repository once the service has resolved
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub project_id: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Request body for `POST /projects/{id}/tasks`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTask {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "must not be blank"),
        length(max = 100, message = "Task title must be at most 100 characters")
    )]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Task description cannot be empty"),
        length(max = 500, message = "Task description must be at most 500 characters")
    )]
    pub description: String,
    /// Defaults to `TODO`
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Request body for `PUT /tasks/{id}`.
///
/// Title and description are always replaced. An absent or `null` status
/// keeps the current one.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "must not be blank"),
        length(max = 100, message = "Task title must be at most 100 characters")
    )]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Task description cannot be empty"),
        length(max = 500, message = "Task description must be at most 500 characters")
    )]
    pub description: String,
    #[serde(default)]
    #[schema(value_type = Option<TaskStatus>)]
    pub status: FieldUpdate<TaskStatus>,
}

impl Task {
    /// Overwrites the mutable fields from an update payload.
    pub fn apply_update(&mut self, input: UpdateTask) {
        self.title = input.title;
        self.description = input.description;
        input.status.apply_to(&mut self.status);
    }
}

/// Wire shape of a task. Carries no project reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
        }
    }
}
