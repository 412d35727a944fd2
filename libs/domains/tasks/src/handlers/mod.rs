mod endpoints;

use axum::{Router, routing::get};
use axum_helpers::errors::responses::{
    BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateTask, TaskResponse, TaskStatus, UpdateTask};
use crate::repository::{ProjectLookup, TaskRepository};
use crate::service::TaskService;

/// OpenAPI documentation for the task endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        endpoints::list_project_tasks,
        endpoints::create_task,
        endpoints::get_task,
        endpoints::update_task,
        endpoints::delete_task,
    ),
    components(
        schemas(TaskResponse, CreateTask, UpdateTask, TaskStatus),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "tasks", description = "Tasks within a project")
    )
)]
pub struct TasksApiDoc;

/// Task routes, mounted at the root:
/// `/projects/{id}/tasks` and `/tasks/{id}`.
pub fn router<R, P>(service: TaskService<R, P>) -> Router
where
    R: TaskRepository + 'static,
    P: ProjectLookup + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/projects/{id}/tasks",
            get(endpoints::list_project_tasks::<R, P>).post(endpoints::create_task::<R, P>),
        )
        .route(
            "/tasks/{id}",
            get(endpoints::get_task::<R, P>)
                .put(endpoints::update_task::<R, P>)
                .delete(endpoints::delete_task::<R, P>),
        )
        .with_state(shared_service)
}
