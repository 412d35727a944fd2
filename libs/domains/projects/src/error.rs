use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, validation_messages};
use domain_tasks::TaskError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project not found with id {0}")]
    NotFound(i64),

    #[error("Invalid input: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProjectResult<T> = Result<T, ProjectError>;

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(_) => AppError::NotFound(err.to_string()),
            ProjectError::Validation(messages) => AppError::ValidationFailed(messages),
            ProjectError::Internal(msg) => AppError::Unexpected(msg),
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for ProjectError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProjectError::Internal(format!("Database error: {}", err))
    }
}

impl From<ValidationErrors> for ProjectError {
    fn from(errors: ValidationErrors) -> Self {
        ProjectError::Validation(validation_messages(&errors))
    }
}

/// Task store failures reached while serving a project request.
impl From<TaskError> for ProjectError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::Internal(msg) => ProjectError::Internal(msg),
            other => ProjectError::Internal(other.to_string()),
        }
    }
}

impl From<ProjectError> for TaskError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => TaskError::ProjectNotFound(id),
            ProjectError::Validation(messages) => TaskError::Validation(messages),
            ProjectError::Internal(msg) => TaskError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            AppError::from(ProjectError::NotFound(5)),
            AppError::NotFound("Project not found with id 5".into())
        );
    }

    #[test]
    fn test_task_store_failures_are_internal() {
        let err = ProjectError::from(TaskError::Internal("Database error: timeout".into()));
        assert!(matches!(err, ProjectError::Internal(msg) if msg.ends_with("timeout")));
    }

    #[test]
    fn test_into_task_error() {
        assert!(matches!(
            TaskError::from(ProjectError::Internal("boom".into())),
            TaskError::Internal(_)
        ));
    }
}
