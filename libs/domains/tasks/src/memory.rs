use async_trait::async_trait;
use axum_helpers::{Page, PageRequest};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{TaskError, TaskResult},
    models::{NewTask, Task},
    repository::TaskRepository,
};

#[derive(Default)]
struct Store {
    last_id: i64,
    tasks: BTreeMap<i64, Task>,
}

/// Process-local task store for tests and local runs.
///
/// Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryTaskRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let task = Task {
            id: store.last_id,
            project_id: input.project_id,
            title: input.title,
            description: input.description,
            status: input.status,
        };
        store.tasks.insert(task.id, task.clone());

        tracing::info!(task_id = task.id, project_id = task.project_id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        Ok(self.store.read().await.tasks.get(&id).cloned())
    }

    async fn list_by_project(
        &self,
        project_id: i64,
        page: PageRequest,
    ) -> TaskResult<Page<Task>> {
        let store = self.store.read().await;
        let tasks: Vec<Task> = store
            .tasks
            .values()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect();

        Ok(Page::new(
            page.slice(&tasks).to_vec(),
            page,
            tasks.len() as u64,
        ))
    }

    async fn find_by_projects(&self, project_ids: Vec<i64>) -> TaskResult<Vec<Task>> {
        let store = self.store.read().await;
        Ok(store
            .tasks
            .values()
            .filter(|t| project_ids.contains(&t.project_id))
            .cloned()
            .collect())
    }

    async fn update(&self, task: Task) -> TaskResult<Task> {
        let mut store = self.store.write().await;
        match store.tasks.get_mut(&task.id) {
            Some(stored) => {
                *stored = task.clone();
                tracing::info!(task_id = task.id, "Updated task");
                Ok(task)
            }
            None => Err(TaskError::NotFound(task.id)),
        }
    }

    async fn delete(&self, id: i64) -> TaskResult<bool> {
        let removed = self.store.write().await.tasks.remove(&id).is_some();
        if removed {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(removed)
    }

    async fn delete_by_project(&self, project_id: i64) -> TaskResult<u64> {
        let mut store = self.store.write().await;
        let before = store.tasks.len();
        store.tasks.retain(|_, t| t.project_id != project_id);
        let removed = (before - store.tasks.len()) as u64;

        tracing::info!(project_id, removed, "Deleted project tasks");
        Ok(removed)
    }
}
