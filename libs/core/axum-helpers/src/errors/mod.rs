//! Error taxonomy and the one place failures become HTTP responses.
//!
//! Every failure raised while serving a request ends up as an [`AppError`].
//! Its [`IntoResponse`] impl picks the status code, logs the event and emits
//! an [`ErrorResponse`] envelope; [`error_envelope`] then stamps the request
//! path onto the envelope at the router boundary.

pub mod codes;
pub mod envelope;
pub mod handlers;
pub mod responses;
pub mod validation;

pub use codes::ErrorCode;
pub use envelope::error_envelope;
pub use validation::{not_blank, validation_messages};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "timestamp": "2025-01-01T10:00:00Z",
///   "status": 404,
///   "message": "Project not found with id 5",
///   "path": "/projects/5",
///   "errors": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    /// HTTP status code, repeated for clients that only see the body
    pub status: u16,
    pub message: String,
    /// Request path that produced the error
    pub path: String,
    /// Per-field `"field: reason"` entries; empty unless validation failed
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            message: message.into(),
            path: String::new(),
            errors,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed for one or more fields")]
    ValidationFailed(Vec<String>),

    #[error("Malformed JSON request")]
    MalformedJson,

    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },

    #[error("Unrecognized field '{0}'")]
    UnrecognizedField(String),

    #[error("{0}")]
    NotFound(String),

    #[error("No handler found for {method} {path}")]
    RouteNotFound { method: String, path: String },

    #[error("Request method '{0}' is not supported")]
    MethodNotAllowed(String),

    /// The payload is logged but never sent to the client.
    #[error("An unexpected error occurred")]
    Unexpected(String),
}

impl AppError {
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationFailed(_)
            | Self::MalformedJson
            | Self::InvalidValue { .. }
            | Self::UnrecognizedField(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::ValidationFailed(_) => ErrorCode::ValidationFailed,
            Self::MalformedJson => ErrorCode::MalformedJson,
            Self::InvalidValue { .. } => ErrorCode::InvalidValue,
            Self::UnrecognizedField(_) => ErrorCode::UnrecognizedField,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::RouteNotFound { .. } => ErrorCode::RouteNotFound,
            Self::MethodNotAllowed(_) => ErrorCode::MethodNotAllowed,
            Self::Unexpected(_) => ErrorCode::Unexpected,
        }
    }

    /// Envelope for this error, without the request path.
    pub fn to_error_response(&self) -> ErrorResponse {
        let errors = match self {
            Self::ValidationFailed(errors) => errors.clone(),
            _ => Vec::new(),
        };
        ErrorResponse::new(self.status(), self.to_string(), errors)
    }

    fn log(&self) {
        let error_code = self.error_code().code();
        match self {
            Self::ValidationFailed(errors) => {
                tracing::info!(error_code, ?errors, "Validation failed");
            }
            Self::MalformedJson => {
                tracing::warn!(error_code, "Malformed JSON request");
            }
            Self::InvalidValue { field, value } => {
                tracing::warn!(error_code, field = %field, value = %value, "Invalid value");
            }
            Self::UnrecognizedField(field) => {
                tracing::warn!(error_code, field = %field, "Unrecognized field");
            }
            Self::NotFound(message) => {
                tracing::warn!(error_code, "{}", message);
            }
            Self::RouteNotFound { method, path } => {
                tracing::info!(error_code, method = %method, path = %path, "No route matched");
            }
            Self::MethodNotAllowed(method) => {
                tracing::info!(error_code, method = %method, "Method not allowed");
            }
            Self::Unexpected(detail) => {
                tracing::error!(error_code, detail = %detail, "Unexpected error");
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationFailed(validation_messages(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = self.to_error_response();
        let mut response = (self.status(), Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}
