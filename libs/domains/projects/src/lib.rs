//! Projects Domain
//!
//! Projects are the top-level unit of work. A project does not own a task
//! collection in memory; its tasks are loaded through the task domain's
//! [`TaskRepository`](domain_tasks::TaskRepository) whenever a response needs
//! them, and removed through it when the project is deleted.
//!
//! Both project repositories also implement
//! [`ProjectLookup`](domain_tasks::ProjectLookup), which is how the task
//! service checks that a parent project exists.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProjectError, ProjectResult};
pub use handlers::ProjectsApiDoc;
pub use memory::InMemoryProjectRepository;
pub use models::{CreateProject, Project, ProjectResponse, ProjectWithTasks, UpdateProject};
pub use postgres::PgProjectRepository;
pub use repository::ProjectRepository;
pub use service::ProjectService;
