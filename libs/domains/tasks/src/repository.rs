use async_trait::async_trait;
use axum_helpers::{Page, PageRequest};

use crate::error::TaskResult;
use crate::models::{NewTask, Task};

/// Repository trait for Task persistence
///
/// Every listing is ordered by ascending id, which is creation order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task; the store assigns the id
    async fn create(&self, input: NewTask) -> TaskResult<Task>;

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// One page of a project's tasks plus the project's task count
    async fn list_by_project(&self, project_id: i64, page: PageRequest)
    -> TaskResult<Page<Task>>;

    /// All tasks of the given projects in a single round trip
    async fn find_by_projects(&self, project_ids: Vec<i64>) -> TaskResult<Vec<Task>>;

    /// Overwrite a stored task. Fails with `NotFound` if it no longer exists.
    async fn update(&self, task: Task) -> TaskResult<Task>;

    /// Returns `false` when there was nothing to delete
    async fn delete(&self, id: i64) -> TaskResult<bool>;

    /// Returns the number of tasks removed
    async fn delete_by_project(&self, project_id: i64) -> TaskResult<u64>;
}

/// The one question the task domain asks of the project domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectLookup: Send + Sync {
    async fn project_exists(&self, project_id: i64) -> TaskResult<bool>;
}
