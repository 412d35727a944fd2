use domain_projects::ProjectsApiDoc;
use domain_tasks::TasksApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Taskboard API",
    description = "Projects and the tasks inside them"
))]
struct BaseDoc;

/// Combined document served at `/api-docs/openapi.json`.
///
/// Domain documents already carry absolute paths, so they are merged rather
/// than nested.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(ProjectsApiDoc::openapi());
        doc.merge(TasksApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/projects",
            "/projects/{id}",
            "/projects/{id}/tasks",
            "/tasks/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {} in {:?}", expected, paths);
        }
        assert_eq!(doc.info.title, "Taskboard API");
    }
}
