use crate::errors::AppError;
use crate::pagination::PageRequest;
use axum::{extract::FromRequestParts, extract::Query, http::request::Parts};
use serde::Deserialize;

#[derive(Deserialize)]
struct RawPageParams {
    page: Option<String>,
    size: Option<String>,
}

/// `?page=&size=` query parameters, defaulting to page 0 of size 10.
///
/// Other query parameters are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination(pub PageRequest);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPageParams>::try_from_uri(&parts.uri).map_err(|_| {
            AppError::invalid_value("query", parts.uri.query().unwrap_or_default())
        })?;

        let page = parse_param("page", raw.page, PageRequest::DEFAULT_PAGE)?;
        let size = parse_param("size", raw.size, PageRequest::DEFAULT_SIZE)?;

        Ok(Pagination(PageRequest::new(page, size)))
    }
}

fn parse_param(name: &str, raw: Option<String>, default: u64) -> Result<u64, AppError> {
    match raw {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_value(name, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<Pagination, AppError> {
        let (mut parts, _) = Request::get(uri).body(()).unwrap().into_parts();
        Pagination::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_defaults() {
        let Pagination(request) = extract("/projects").await.unwrap();
        assert_eq!(request, PageRequest::new(0, 10));
    }

    #[tokio::test]
    async fn test_explicit_values_and_unknown_params() {
        let Pagination(request) = extract("/projects?page=2&size=5&sort=name").await.unwrap();
        assert_eq!(request, PageRequest::new(2, 5));
    }

    #[tokio::test]
    async fn test_empty_value_falls_back_to_default() {
        let Pagination(request) = extract("/projects?page=&size=3").await.unwrap();
        assert_eq!(request, PageRequest::new(0, 3));
    }

    #[tokio::test]
    async fn test_negative_page_is_invalid() {
        let err = extract("/projects?page=-1").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid value '-1' for field 'page'");
    }

    #[tokio::test]
    async fn test_non_numeric_size_is_invalid() {
        let err = extract("/projects?size=ten").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid value 'ten' for field 'size'");
    }
}
