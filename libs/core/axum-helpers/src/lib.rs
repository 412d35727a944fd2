//! # Axum Helpers
//!
//! Shared HTTP plumbing for the taskboard services.
//!
//! - **[`errors`]**: the [`AppError`] taxonomy and the single translation
//!   into the JSON error envelope
//! - **[`extractors`]**: validated JSON bodies, numeric id paths, pagination
//! - **[`pagination`]**: the `Page<T>` list envelope
//! - **[`fields`]**: serde helpers for request payloads
//! - **[`middleware`]**: security headers and CORS
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_production_app(router, &server_config, cleanup).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod fields;
pub mod middleware;
pub mod pagination;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse, error_envelope, validation_messages};
pub use extractors::{IdPath, Pagination, ValidatedJson};
pub use fields::FieldUpdate;
pub use pagination::{Page, PageRequest};
pub use server::{
    ShutdownCoordinator, create_production_app, create_router, health_router, run_health_checks,
};
