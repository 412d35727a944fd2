use axum_helpers::errors::not_blank;
use axum_helpers::fields::null_as_empty;
use domain_tasks::{Task, TaskResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Request body for `POST /projects`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProject {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "must not be blank"),
        length(max = 100, message = "Project name must be at most 100 characters")
    )]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Project description cannot be empty"),
        length(max = 500, message = "Project description must be at most 500 characters")
    )]
    pub description: String,
}

/// Request body for `PUT /projects/{id}`. Both fields are replaced.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "must not be blank"),
        length(max = 100, message = "Project name must be at most 100 characters")
    )]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Project description cannot be empty"),
        length(max = 500, message = "Project description must be at most 500 characters")
    )]
    pub description: String,
}

impl Project {
    pub fn apply_update(&mut self, input: UpdateProject) {
        self.name = input.name;
        self.description = input.description;
    }
}

/// A project together with its tasks, ordered by task id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectWithTasks {
    pub project: Project,
    pub tasks: Vec<Task>,
}

impl ProjectWithTasks {
    pub fn new(project: Project, tasks: Vec<Task>) -> Self {
        Self { project, tasks }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tasks: Vec<TaskResponse>,
}

impl From<ProjectWithTasks> for ProjectResponse {
    fn from(value: ProjectWithTasks) -> Self {
        Self {
            id: value.project.id,
            name: value.project.name,
            description: value.project.description,
            tasks: value.tasks.into_iter().map(TaskResponse::from).collect(),
        }
    }
}
