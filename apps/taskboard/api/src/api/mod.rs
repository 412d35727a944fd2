use axum::Router;
use domain_projects::{PgProjectRepository, ProjectRepository};
use domain_tasks::{PgTaskRepository, ProjectLookup, TaskRepository};

pub mod health;

/// Project and task routes over the given stores.
///
/// The task store is shared by both services so project responses and
/// cascading deletes see the same tasks the task endpoints write. The
/// project store doubles as the task service's existence check.
pub fn compose<P, T>(projects: P, tasks: T) -> Router
where
    P: ProjectRepository + ProjectLookup + Clone + 'static,
    T: TaskRepository + Clone + 'static,
{
    let project_service = domain_projects::ProjectService::new(projects.clone(), tasks.clone());
    let task_service = domain_tasks::TaskService::new(tasks, projects);

    Router::new()
        .merge(domain_projects::handlers::router(project_service))
        .merge(domain_tasks::handlers::router(task_service))
}

/// Routes backed by PostgreSQL.
pub fn routes(state: &crate::state::AppState) -> Router {
    compose(
        PgProjectRepository::new(state.db.clone()),
        PgTaskRepository::new(state.db.clone()),
    )
}

/// `/ready`, which checks the database on every call.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
