use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, validation_messages};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found with id {0}")]
    NotFound(i64),

    #[error("Project not found with id {0}")]
    ProjectNotFound(i64),

    #[error("Invalid input: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) | TaskError::ProjectNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            TaskError::Validation(messages) => AppError::ValidationFailed(messages),
            TaskError::Internal(msg) => AppError::Unexpected(msg),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for TaskError {
    fn from(err: sea_orm::DbErr) -> Self {
        TaskError::Internal(format!("Database error: {}", err))
    }
}

impl From<ValidationErrors> for TaskError {
    fn from(errors: ValidationErrors) -> Self {
        TaskError::Validation(validation_messages(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            AppError::from(TaskError::NotFound(4)),
            AppError::NotFound("Task not found with id 4".into())
        );
        assert_eq!(
            AppError::from(TaskError::ProjectNotFound(9)),
            AppError::NotFound("Project not found with id 9".into())
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            TaskError::Validation(vec!["title: must not be blank".into()])
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TaskError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_errors_are_internal() {
        let err = TaskError::from(sea_orm::DbErr::Custom("connection reset".into()));
        assert!(matches!(err, TaskError::Internal(msg) if msg.contains("connection reset")));
    }
}
