//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into the readiness handler and used to build the repositories.
/// Cloning only copies the pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
