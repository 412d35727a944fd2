//! Taskboard HTTP API.
//!
//! The binary in `main.rs` wires PostgreSQL-backed repositories into
//! [`api::compose`]; tests wire the in-memory ones instead and get the same
//! routes and middleware.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::create_router;

pub use config::Config;
pub use openapi::ApiDoc;
pub use state::AppState;

/// API routes wrapped in the shared middleware stack and documentation
/// endpoints. Health and readiness routes are merged by the caller.
pub fn app(routes: Router) -> Router {
    create_router::<ApiDoc>(routes)
}
