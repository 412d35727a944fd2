use super::shutdown::ShutdownCoordinator;
use crate::errors::error_envelope;
use crate::errors::handlers::{method_not_allowed, panic_response, route_not_found};
use crate::middleware::{cors_layer_from_env, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Wraps the API routes with documentation and the shared middleware stack.
///
/// Adds:
/// - `GET /api-docs/openapi.json` and the Scalar reference at `/scalar`
/// - JSON error envelopes for unmatched routes, unsupported methods and panics
/// - request tracing, security headers, optional CORS and compression
///
/// `apis` must already have its state applied. Health endpoints are merged by
/// the caller.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();
    let document = openapi.clone();

    let router = Router::new()
        .merge(Scalar::with_url("/scalar", openapi))
        .route(
            OPENAPI_PATH,
            get(move || {
                let document = document.clone();
                async move { Json(document) }
            }),
        )
        .merge(apis)
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(error_envelope))
        .layer(middleware::from_fn(security_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let router = match cors_layer_from_env() {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(CompressionLayer::new())
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` bounded by
/// `server_config.shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let shutdown_timeout = server_config.shutdown_timeout;

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!(address = %listener.local_addr()?, "Server listening");

    let cleanup_watcher = coordinator.clone();
    let cleanup_handle = tokio::spawn(async move {
        cleanup_watcher.wait_for_signal().await;
        info!(timeout = ?shutdown_timeout, "Running shutdown cleanup");
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => warn!(timeout = ?shutdown_timeout, "Cleanup timed out, forcing shutdown"),
        }
    });

    let signal = coordinator.clone();
    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "Server error"));

    // A server error never fires the signal, so release the cleanup task here.
    coordinator.shutdown();
    if let Err(e) = cleanup_handle.await {
        warn!(error = %e, "Cleanup task failed");
    }

    served
}
