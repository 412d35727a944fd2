use axum_helpers::{Page, PageRequest};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, NewTask, Task, UpdateTask};
use crate::repository::{ProjectLookup, TaskRepository};

/// Service layer for Task business logic
pub struct TaskService<R: TaskRepository, P: ProjectLookup> {
    repository: Arc<R>,
    projects: Arc<P>,
}

impl<R: TaskRepository, P: ProjectLookup> TaskService<R, P> {
    pub fn new(repository: R, projects: P) -> Self {
        Self {
            repository: Arc::new(repository),
            projects: Arc::new(projects),
        }
    }

    async fn ensure_project(&self, project_id: i64) -> TaskResult<()> {
        if self.projects.project_exists(project_id).await? {
            Ok(())
        } else {
            Err(TaskError::ProjectNotFound(project_id))
        }
    }

    /// Create a task under an existing project. Status defaults to `TODO`.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, project_id: i64, input: CreateTask) -> TaskResult<Task> {
        input.validate()?;
        self.ensure_project(project_id).await?;

        self.repository
            .create(NewTask {
                project_id,
                title: input.title,
                description: input.description,
                status: input.status.unwrap_or_default(),
            })
            .await
    }

    #[instrument(skip(self), fields(task_id = id))]
    pub async fn get_task(&self, id: i64) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Page through a project's tasks. An unknown project is `NotFound` even
    /// though its task list would simply be empty.
    #[instrument(skip(self))]
    pub async fn list_tasks_for_project(
        &self,
        project_id: i64,
        page: PageRequest,
    ) -> TaskResult<Page<Task>> {
        self.ensure_project(project_id).await?;
        self.repository.list_by_project(project_id, page).await
    }

    #[instrument(skip(self, input), fields(task_id = id))]
    pub async fn update_task(&self, id: i64, input: UpdateTask) -> TaskResult<Task> {
        input.validate()?;

        let mut task = self.get_task(id).await?;
        task.apply_update(input);

        self.repository.update(task).await
    }

    #[instrument(skip(self), fields(task_id = id))]
    pub async fn delete_task(&self, id: i64) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
