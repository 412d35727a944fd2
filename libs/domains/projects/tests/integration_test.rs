//! Integration tests for the Projects domain against real PostgreSQL
//!
//! Needs Docker; run with `cargo test -- --ignored`.

use axum_helpers::PageRequest;
use domain_projects::*;
use domain_tasks::{NewTask, PgTaskRepository, ProjectLookup, TaskRepository, TaskStatus};
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn input(builder: &TestDataBuilder, suffix: &str) -> CreateProject {
    CreateProject {
        name: builder.name("project", suffix),
        description: "Integration test project".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_project() {
    let db = TestDatabase::new().await;
    let repo = PgProjectRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let created = repo.create(input(&builder, "main")).await.unwrap();
    assert_eq!(created.name, builder.name("project", "main"));

    let retrieved = assert_some(repo.get_by_id(created.id).await.unwrap(), "project");
    assert_eq!(retrieved, created);
    assert!(repo.get_by_id(created.id + 1000).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_orders_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgProjectRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_orders");

    for i in 0..4 {
        repo.create(input(&builder, &i.to_string())).await.unwrap();
    }

    let page = repo.list(PageRequest::new(0, 10)).await.unwrap();
    assert_eq!(page.total, 4);
    let ids: Vec<i64> = page.items.iter().map(|p| p.id).collect();
    assert_ascending(&ids, "project ids");

    let page = repo.list(PageRequest::new(1, 3)).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 4);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_with_huge_page_values() {
    let db = TestDatabase::new().await;
    let repo = PgProjectRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_huge_page");
    repo.create(input(&builder, "only")).await.unwrap();

    let page = repo.list(PageRequest::new(u64::MAX, 10)).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);
    assert_eq!(page.page, u64::MAX);

    let page = repo.list(PageRequest::new(0, u64::MAX)).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_project() {
    let db = TestDatabase::new().await;
    let repo = PgProjectRepository::new(db.connection());

    let result = repo
        .update(Project {
            id: 4242,
            name: "ghost".to_string(),
            description: "ghost".to_string(),
        })
        .await;
    assert!(matches!(result, Err(ProjectError::NotFound(4242))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_project_removes_its_tasks() {
    let db = TestDatabase::new().await;
    let projects = PgProjectRepository::new(db.connection());
    let tasks = PgTaskRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_cascade");

    let project = projects.create(input(&builder, "main")).await.unwrap();
    let mut task_ids = Vec::new();
    for i in 0..3 {
        let task = tasks
            .create(NewTask {
                project_id: project.id,
                title: builder.name("task", &i.to_string()),
                description: "cascade".to_string(),
                status: TaskStatus::Todo,
            })
            .await
            .unwrap();
        task_ids.push(task.id);
    }

    let service = ProjectService::new(projects.clone(), tasks.clone());
    service.delete_project(project.id).await.unwrap();

    for id in task_ids {
        assert!(tasks.get_by_id(id).await.unwrap().is_none());
    }
    assert!(!projects.project_exists(project.id).await.unwrap());
}
