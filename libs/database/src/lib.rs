//! Relational storage plumbing shared by the taskboard services.
//!
//! - `postgres` (default): SeaORM connection pool, migration runner and
//!   readiness probe.
//! - `config`: loads [`postgres::PostgresConfig`] through `core_config::FromEnv`.
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use database::common::RetryConfig;
//!
//! let db = postgres::connect_from_config_with_retry(config, Some(RetryConfig::default())).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "taskboard_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
