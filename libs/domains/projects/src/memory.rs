use async_trait::async_trait;
use axum_helpers::{Page, PageRequest};
use domain_tasks::{ProjectLookup, TaskResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{ProjectError, ProjectResult},
    models::{CreateProject, Project},
    repository::ProjectRepository,
};

#[derive(Default)]
struct Store {
    last_id: i64,
    projects: BTreeMap<i64, Project>,
}

/// Process-local project store for tests and local runs.
///
/// Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, input: CreateProject) -> ProjectResult<Project> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let project = Project {
            id: store.last_id,
            name: input.name,
            description: input.description,
        };
        store.projects.insert(project.id, project.clone());

        tracing::info!(project_id = project.id, "Created project");
        Ok(project)
    }

    async fn get_by_id(&self, id: i64) -> ProjectResult<Option<Project>> {
        Ok(self.store.read().await.projects.get(&id).cloned())
    }

    async fn list(&self, page: PageRequest) -> ProjectResult<Page<Project>> {
        let store = self.store.read().await;
        let projects: Vec<Project> = store.projects.values().cloned().collect();

        Ok(Page::new(
            page.slice(&projects).to_vec(),
            page,
            projects.len() as u64,
        ))
    }

    async fn update(&self, project: Project) -> ProjectResult<Project> {
        let mut store = self.store.write().await;
        match store.projects.get_mut(&project.id) {
            Some(stored) => {
                *stored = project.clone();
                tracing::info!(project_id = project.id, "Updated project");
                Ok(project)
            }
            None => Err(ProjectError::NotFound(project.id)),
        }
    }

    async fn delete(&self, id: i64) -> ProjectResult<bool> {
        let removed = self.store.write().await.projects.remove(&id).is_some();
        if removed {
            tracing::info!(project_id = id, "Deleted project");
        }
        Ok(removed)
    }

    async fn exists(&self, id: i64) -> ProjectResult<bool> {
        Ok(self.store.read().await.projects.contains_key(&id))
    }
}

#[async_trait]
impl ProjectLookup for InMemoryProjectRepository {
    async fn project_exists(&self, project_id: i64) -> TaskResult<bool> {
        Ok(self.exists(project_id).await?)
    }
}
