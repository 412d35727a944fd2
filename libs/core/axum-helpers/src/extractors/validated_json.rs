//! JSON body extractor with field-aware error reporting and validation.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use validator::Validate;

/// Deserializes the body and runs `validator` checks on it.
///
/// Failures map onto the error taxonomy:
/// - unparsable or non-object body: [`AppError::MalformedJson`]
/// - key the type does not accept: [`AppError::UnrecognizedField`]
/// - wrong type or unknown enum literal: [`AppError::InvalidValue`]
/// - constraint violations: [`AppError::ValidationFailed`]
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateProject>) -> ... { }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            AppError::MalformedJson
        })?;

        let data: T = decode_json(&bytes)?;
        data.validate()?;

        Ok(ValidatedJson(data))
    }
}

/// Parses a JSON object into `T`, classifying failures by field.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|_| AppError::MalformedJson)?;
    if !value.is_object() {
        return Err(AppError::MalformedJson);
    }

    serde_path_to_error::deserialize(&value).map_err(|e| classify(&value, e))
}

fn classify(root: &Value, error: serde_path_to_error::Error<serde_json::Error>) -> AppError {
    let message = error.inner().to_string();

    if let Some(field) = backticked(&message, "unknown field `") {
        return AppError::UnrecognizedField(field);
    }
    if let Some(field) = backticked(&message, "missing field `") {
        return AppError::ValidationFailed(vec![format!("{}: must not be blank", field)]);
    }

    let value = lookup(root, error.path()).map(render).unwrap_or_default();
    AppError::invalid_value(error.path().to_string(), value)
}

fn backticked(message: &str, prefix: &str) -> Option<String> {
    let rest = message.strip_prefix(prefix)?;
    rest.split('`').next().map(str::to_owned)
}

fn lookup<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, segment| match segment {
        Segment::Map { key } => node.get(key.as_str()),
        Segment::Seq { index } => node.get(*index),
        Segment::Enum { .. } | Segment::Unknown => Some(node),
    })
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
