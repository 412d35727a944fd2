use std::any::Any;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
};

use super::AppError;

/// Router fallback for paths with no matching route.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
}

/// Fallback for a matched path with an unsupported method.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}

/// `CatchPanicLayer` handler: a panicking handler becomes a 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        "non-string panic payload".to_owned()
    };

    AppError::Unexpected(format!("handler panicked: {}", detail)).into_response()
}
