use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const CORS_ENV: &str = "CORS_ALLOWED_ORIGIN";

/// Builds a CORS layer from the comma-separated origins in
/// `CORS_ALLOWED_ORIGIN`.
///
/// Returns `None` when the variable is unset or holds no usable origin, in
/// which case no CORS headers are emitted.
pub fn cors_layer_from_env() -> Option<CorsLayer> {
    let raw = std::env::var(CORS_ENV).ok()?;
    let origins = parse_origins(&raw);
    if origins.is_empty() {
        tracing::warn!(value = %raw, "{} has no valid origins, CORS disabled", CORS_ENV);
        return None;
    }

    tracing::info!(origins = %raw, "CORS enabled");
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600)),
    )
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match HeaderValue::from_str(s) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = s, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins("http://localhost:3000, ,https://example.com");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://example.com");
    }

    #[test]
    fn test_unset_disables_cors() {
        temp_env::with_var_unset(CORS_ENV, || {
            assert!(cors_layer_from_env().is_none());
        });
    }

    #[test]
    fn test_set_enables_cors() {
        temp_env::with_var(CORS_ENV, Some("http://localhost:5173"), || {
            assert!(cors_layer_from_env().is_some());
        });
    }
}
