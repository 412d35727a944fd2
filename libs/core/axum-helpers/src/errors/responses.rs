//! Reusable OpenAPI responses for the error envelope.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Malformed body, invalid value or failed validation",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T10:00:00Z",
        "status": 400,
        "message": "Validation failed for one or more fields",
        "path": "/projects",
        "errors": ["name: must not be blank"]
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Referenced resource does not exist",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T10:00:00Z",
        "status": 404,
        "message": "Project not found with id 5",
        "path": "/projects/5",
        "errors": []
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unexpected server failure",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-01T10:00:00Z",
        "status": 500,
        "message": "An unexpected error occurred",
        "path": "/projects",
        "errors": []
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
