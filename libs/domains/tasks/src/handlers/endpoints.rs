use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
};
use axum_helpers::{IdPath, Page, Pagination, ValidatedJson};
use std::sync::Arc;

use crate::error::TaskResult;
use crate::models::{CreateTask, TaskResponse, UpdateTask};
use crate::repository::{ProjectLookup, TaskRepository};
use crate::service::TaskService;

/// List a project's tasks
#[utoipa::path(
    get,
    path = "/projects/{id}/tasks",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Project ID"),
        ("page" = Option<u64>, Query, description = "Zero-based page index (default 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default 10)")
    ),
    responses(
        (status = 200, description = "One page of tasks", body = Page<TaskResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn list_project_tasks<R: TaskRepository, P: ProjectLookup>(
    State(service): State<Arc<TaskService<R, P>>>,
    IdPath(project_id): IdPath,
    Pagination(page): Pagination,
) -> TaskResult<Json<Page<TaskResponse>>> {
    let tasks = service.list_tasks_for_project(project_id, page).await?;
    Ok(Json(tasks.map(TaskResponse::from)))
}

/// Create a task under a project
#[utoipa::path(
    post,
    path = "/projects/{id}/tasks",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn create_task<R: TaskRepository, P: ProjectLookup>(
    State(service): State<Arc<TaskService<R, P>>>,
    IdPath(project_id): IdPath,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(project_id, input).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn get_task<R: TaskRepository, P: ProjectLookup>(
    State(service): State<Arc<TaskService<R, P>>>,
    IdPath(id): IdPath,
) -> TaskResult<Json<TaskResponse>> {
    let task = service.get_task(id).await?;
    Ok(Json(task.into()))
}

/// Update a task
///
/// Title and description are replaced; status only when supplied.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn update_task<R: TaskRepository, P: ProjectLookup>(
    State(service): State<Arc<TaskService<R, P>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> TaskResult<Json<TaskResponse>> {
    let task = service.update_task(id, input).await?;
    Ok(Json(task.into()))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
pub async fn delete_task<R: TaskRepository, P: ProjectLookup>(
    State(service): State<Arc<TaskService<R, P>>>,
    IdPath(id): IdPath,
) -> TaskResult<StatusCode> {
    service.delete_task(id).await?;
    Ok(StatusCode::OK)
}
