use async_trait::async_trait;
use axum_helpers::{Page, PageRequest};

use crate::error::ProjectResult;
use crate::models::{CreateProject, Project};

/// Repository trait for Project persistence
///
/// Listings are ordered by ascending id, which is creation order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project>;

    async fn get_by_id(&self, id: i64) -> ProjectResult<Option<Project>>;

    /// One page of projects plus the total project count
    async fn list(&self, page: PageRequest) -> ProjectResult<Page<Project>>;

    /// Overwrite a stored project. Fails with `NotFound` if it no longer exists.
    async fn update(&self, project: Project) -> ProjectResult<Project>;

    /// Returns `false` when there was nothing to delete
    async fn delete(&self, id: i64) -> ProjectResult<bool>;

    async fn exists(&self, id: i64) -> ProjectResult<bool>;
}
