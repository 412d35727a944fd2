use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Fills in `path` on error envelopes produced further down the stack.
///
/// Must sit outside every layer or fallback that can emit an [`ErrorResponse`].
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    let Some(envelope) = response.extensions().get::<ErrorResponse>().cloned() else {
        return response;
    };

    let envelope = envelope.with_path(path);
    let bytes = match serde_json::to_vec(&envelope) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize error envelope");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.extensions.insert(envelope);
    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use crate::errors::AppError;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/projects/{id}",
                get(|| async { AppError::NotFound("Project not found with id 5".into()) }),
            )
            .route("/ok", get(|| async { "fine" }))
            .layer(middleware::from_fn(super::error_envelope))
    }

    #[tokio::test]
    async fn test_path_is_attached_to_error() {
        let response = app()
            .oneshot(Request::get("/projects/5").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["path"], "/projects/5");
        assert_eq!(body["message"], "Project not found with id 5");
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let response = app()
            .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"fine");
    }
}
