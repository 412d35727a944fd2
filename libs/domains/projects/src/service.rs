use axum_helpers::{Page, PageRequest};
use domain_tasks::{Task, TaskRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProjectError, ProjectResult};
use crate::models::{CreateProject, ProjectWithTasks, UpdateProject};
use crate::repository::ProjectRepository;

/// Service layer for Project business logic
///
/// Task lists attached to projects come from the task store, so responses
/// always reflect the tasks as currently stored.
pub struct ProjectService<R: ProjectRepository, T: TaskRepository> {
    repository: Arc<R>,
    tasks: Arc<T>,
}

impl<R: ProjectRepository, T: TaskRepository> ProjectService<R, T> {
    pub fn new(repository: R, tasks: T) -> Self {
        Self {
            repository: Arc::new(repository),
            tasks: Arc::new(tasks),
        }
    }

    #[instrument(skip(self, input), fields(project_name = %input.name))]
    pub async fn create_project(&self, input: CreateProject) -> ProjectResult<ProjectWithTasks> {
        input.validate()?;

        let project = self.repository.create(input).await?;
        Ok(ProjectWithTasks::new(project, Vec::new()))
    }

    #[instrument(skip(self), fields(project_id = id))]
    pub async fn get_project(&self, id: i64) -> ProjectResult<ProjectWithTasks> {
        let project = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))?;

        let tasks = self.tasks.find_by_projects(vec![id]).await?;
        Ok(ProjectWithTasks::new(project, tasks))
    }

    /// One page of projects, each with its tasks. Tasks for the whole page
    /// are loaded in one call.
    #[instrument(skip(self))]
    pub async fn list_projects(&self, page: PageRequest) -> ProjectResult<Page<ProjectWithTasks>> {
        let projects = self.repository.list(page).await?;
        if projects.items.is_empty() {
            return Ok(projects.map(|p| ProjectWithTasks::new(p, Vec::new())));
        }

        let ids = projects.items.iter().map(|p| p.id).collect();
        let mut by_project: HashMap<i64, Vec<Task>> = HashMap::new();
        for task in self.tasks.find_by_projects(ids).await? {
            by_project.entry(task.project_id).or_default().push(task);
        }

        Ok(projects.map(|project| {
            let tasks = by_project.remove(&project.id).unwrap_or_default();
            ProjectWithTasks::new(project, tasks)
        }))
    }

    /// Replace name and description. Tasks are left alone.
    #[instrument(skip(self, input), fields(project_id = id))]
    pub async fn update_project(
        &self,
        id: i64,
        input: UpdateProject,
    ) -> ProjectResult<ProjectWithTasks> {
        input.validate()?;

        let mut project = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id))?;
        project.apply_update(input);

        let project = self.repository.update(project).await?;
        let tasks = self.tasks.find_by_projects(vec![id]).await?;
        Ok(ProjectWithTasks::new(project, tasks))
    }

    /// Delete a project and every task under it.
    #[instrument(skip(self), fields(project_id = id))]
    pub async fn delete_project(&self, id: i64) -> ProjectResult<()> {
        if !self.repository.exists(id).await? {
            return Err(ProjectError::NotFound(id));
        }

        // Two separate writes. Postgres closes the gap with its cascading
        // foreign key; the in-memory stores can keep a task created in between.
        let removed = self.tasks.delete_by_project(id).await?;
        tracing::debug!(removed, "Removed project tasks");

        if !self.repository.delete(id).await? {
            return Err(ProjectError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;
    use crate::repository::MockProjectRepository;
    use async_trait::async_trait;
    use domain_tasks::{InMemoryTaskRepository, NewTask, TaskResult, TaskStatus};
    use mockall::predicate::eq;
    use mockall::{Sequence, mock};

    mock! {
        Tasks {}

        #[async_trait]
        impl TaskRepository for Tasks {
            async fn create(&self, input: NewTask) -> TaskResult<Task>;
            async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>>;
            async fn list_by_project(&self, project_id: i64, page: PageRequest) -> TaskResult<Page<Task>>;
            async fn find_by_projects(&self, project_ids: Vec<i64>) -> TaskResult<Vec<Task>>;
            async fn update(&self, task: Task) -> TaskResult<Task>;
            async fn delete(&self, id: i64) -> TaskResult<bool>;
            async fn delete_by_project(&self, project_id: i64) -> TaskResult<u64>;
        }
    }

    fn project(id: i64) -> Project {
        Project {
            id,
            name: format!("project-{}", id),
            description: "desc".into(),
        }
    }

    fn task(id: i64, project_id: i64) -> Task {
        Task {
            id,
            project_id,
            title: format!("task-{}", id),
            description: "desc".into(),
            status: TaskStatus::Todo,
        }
    }

    #[tokio::test]
    async fn test_create_returns_empty_task_list() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create().times(1).returning(|input| {
            Ok(Project {
                id: 1,
                name: input.name,
                description: input.description,
            })
        });

        let service = ProjectService::new(repo, InMemoryTaskRepository::new());
        let created = service
            .create_project(CreateProject {
                name: "Launch".into(),
                description: "Q1 launch".into(),
            })
            .await
            .unwrap();

        assert_eq!(created.project.id, 1);
        assert_eq!(created.project.name, "Launch");
        assert!(created.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create().never();

        let service = ProjectService::new(repo, InMemoryTaskRepository::new());
        let result = service
            .create_project(CreateProject {
                name: "n".repeat(101),
                description: String::new(),
            })
            .await;

        match result {
            Err(ProjectError::Validation(messages)) => assert_eq!(messages.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_project_includes_tasks() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(project(id))));

        let tasks = InMemoryTaskRepository::new();
        for (project_id, title) in [(1, "a"), (2, "b"), (1, "c")] {
            tasks
                .create(NewTask {
                    project_id,
                    title: title.into(),
                    description: "d".into(),
                    status: TaskStatus::Todo,
                })
                .await
                .unwrap();
        }

        let service = ProjectService::new(repo, tasks);
        let found = service.get_project(1).await.unwrap();
        let titles: Vec<_> = found.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_get_missing_project() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProjectService::new(repo, InMemoryTaskRepository::new());
        assert!(matches!(
            service.get_project(5).await,
            Err(ProjectError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_list_loads_tasks_in_one_call() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list().returning(|page| {
            Ok(Page::new(vec![project(1), project(2), project(3)], page, 7))
        });

        let mut tasks = MockTasks::new();
        tasks
            .expect_find_by_projects()
            .with(eq(vec![1, 2, 3]))
            .times(1)
            .returning(|_| Ok(vec![task(10, 1), task(11, 3), task(12, 1)]));

        let service = ProjectService::new(repo, tasks);
        let page = service.list_projects(PageRequest::new(0, 3)).await.unwrap();

        assert_eq!(page.total, 7);
        assert_eq!(page.items.len(), 3);
        let task_ids: Vec<Vec<i64>> = page
            .items
            .iter()
            .map(|p| p.tasks.iter().map(|t| t.id).collect())
            .collect();
        assert_eq!(task_ids, vec![vec![10, 12], vec![], vec![11]]);
    }

    #[tokio::test]
    async fn test_empty_page_skips_task_lookup() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list()
            .returning(|page| Ok(Page::new(Vec::new(), page, 2)));

        let mut tasks = MockTasks::new();
        tasks.expect_find_by_projects().never();

        let service = ProjectService::new(repo, tasks);
        let page = service.list_projects(PageRequest::new(5, 10)).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!((page.page, page.size, page.total), (5, 10, 2));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_by_id().returning(|id| Ok(Some(project(id))));
        repo.expect_update()
            .withf(|p| p.name == "Renamed" && p.description == "new")
            .returning(Ok);

        let service = ProjectService::new(repo, InMemoryTaskRepository::new());
        let updated = service
            .update_project(
                4,
                UpdateProject {
                    name: "Renamed".into(),
                    description: "new".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.project.id, 4);
        assert_eq!(updated.project.name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = ProjectService::new(repo, InMemoryTaskRepository::new());
        let result = service
            .update_project(
                4,
                UpdateProject {
                    name: "n".into(),
                    description: "d".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(ProjectError::NotFound(4))));
    }

    #[tokio::test]
    async fn test_delete_removes_tasks_before_project() {
        let mut seq = Sequence::new();
        let mut repo = MockProjectRepository::new();
        let mut tasks = MockTasks::new();

        repo.expect_exists()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        tasks
            .expect_delete_by_project()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(3));
        repo.expect_delete()
            .with(eq(1))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        let service = ProjectService::new(repo, tasks);
        service.delete_project(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_project_touches_no_tasks() {
        let mut repo = MockProjectRepository::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_delete().never();

        let mut tasks = MockTasks::new();
        tasks.expect_delete_by_project().never();

        let service = ProjectService::new(repo, tasks);
        assert!(matches!(
            service.delete_project(9).await,
            Err(ProjectError::NotFound(9))
        ));
    }
}
