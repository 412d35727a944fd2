use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, Page, Pagination, ValidatedJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use domain_tasks::{TaskRepository, TaskResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProjectResult;
use crate::models::{CreateProject, ProjectResponse, UpdateProject};
use crate::repository::ProjectRepository;
use crate::service::ProjectService;

/// OpenAPI documentation for the project endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        get_project,
        update_project,
        delete_project,
    ),
    components(
        schemas(ProjectResponse, TaskResponse, CreateProject, UpdateProject),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "projects", description = "Project management endpoints")
    )
)]
pub struct ProjectsApiDoc;

/// Project routes, mounted at `/projects`
pub fn router<R, T>(service: ProjectService<R, T>) -> Router
where
    R: ProjectRepository + 'static,
    T: TaskRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/projects",
            get(list_projects::<R, T>).post(create_project::<R, T>),
        )
        .route(
            "/projects/{id}",
            get(get_project::<R, T>)
                .put(update_project::<R, T>)
                .delete(delete_project::<R, T>),
        )
        .with_state(shared_service)
}

/// List projects, oldest first
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    params(
        ("page" = Option<u64>, Query, description = "Zero-based page index (default 0)"),
        ("size" = Option<u64>, Query, description = "Page size (default 10)")
    ),
    responses(
        (status = 200, description = "One page of projects", body = Page<ProjectResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_projects<R: ProjectRepository, T: TaskRepository>(
    State(service): State<Arc<ProjectService<R, T>>>,
    Pagination(page): Pagination,
) -> ProjectResult<Json<Page<ProjectResponse>>> {
    let projects = service.list_projects(page).await?;
    Ok(Json(projects.map(ProjectResponse::from)))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_project<R: ProjectRepository, T: TaskRepository>(
    State(service): State<Arc<ProjectService<R, T>>>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> ProjectResult<impl IntoResponse> {
    let project = service.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

/// Get a project and its tasks
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project<R: ProjectRepository, T: TaskRepository>(
    State(service): State<Arc<ProjectService<R, T>>>,
    IdPath(id): IdPath,
) -> ProjectResult<Json<ProjectResponse>> {
    let project = service.get_project(id).await?;
    Ok(Json(project.into()))
}

/// Replace a project's name and description
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_project<R: ProjectRepository, T: TaskRepository>(
    State(service): State<Arc<ProjectService<R, T>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> ProjectResult<Json<ProjectResponse>> {
    let project = service.update_project(id, input).await?;
    Ok(Json(project.into()))
}

/// Delete a project together with its tasks
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    params(
        ("id" = i64, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project and its tasks deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_project<R: ProjectRepository, T: TaskRepository>(
    State(service): State<Arc<ProjectService<R, T>>>,
    IdPath(id): IdPath,
) -> ProjectResult<StatusCode> {
    service.delete_project(id).await?;
    Ok(StatusCode::OK)
}
