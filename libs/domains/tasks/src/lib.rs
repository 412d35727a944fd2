//! Tasks Domain
//!
//! Tasks belong to exactly one project. This crate owns the task records,
//! their validation rules and HTTP handlers; the project side is reached only
//! through the [`ProjectLookup`] port.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /projects/{id}/tasks, /tasks/{id}
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, project existence, status defaults
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← TaskRepository: PostgreSQL or in-memory
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, TaskStatus
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_tasks::{PgTaskRepository, TaskService};
//!
//! let repository = PgTaskRepository::new(db.clone());
//! let service = TaskService::new(repository, project_lookup);
//! let routes = domain_tasks::handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TaskError, TaskResult};
pub use handlers::TasksApiDoc;
pub use memory::InMemoryTaskRepository;
pub use models::{CreateTask, NewTask, Task, TaskResponse, TaskStatus, UpdateTask};
pub use postgres::PgTaskRepository;
pub use repository::{ProjectLookup, TaskRepository};
pub use service::TaskService;
