//! The response envelope shared by every endpoint.
//!
//! Success: `{ "success": true, "data": ... }`.
//! Failure: `{ "success": false, "error": { "code", "message", "details" } }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use kontor_shared::AppError;

/// Wraps payload data in the success envelope.
pub fn success<T: Serialize>(data: T) -> Json<serde_json::Value> {
    Json(json!({ "success": true, "data": data }))
}

/// Error half of the envelope; converts from every domain error so handlers
/// can use `?` throughout.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let details: Vec<String> = match &self.0 {
            AppError::Validation(message) => vec![message.clone()],
            _ => Vec::new(),
        };
        let body = json!({
            "success": false,
            "error": {
                "code": self.0.error_code(),
                "message": self.0.to_string(),
                "details": details,
            }
        });
        (status, Json(body)).into_response()
    }
}

impl<E: Into<AppError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
