//! API error handling.
//!
//! This module provides error types and response formatting for the API.
//! The single domain error is "task not found"; everything the repository
//! reports as a storage failure maps to an opaque 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::infrastructure::RepositoryError;

/// API error structure for JSON responses.
///
/// # Example JSON
///
/// ```json
/// {
///     "code": "TASK_NOT_FOUND",
///     "message": "The specified task was not found",
///     "details": { "task_id": 42 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates a new `ApiError` without details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new `ApiError` with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Response wrapper that includes the HTTP status code with [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new `ApiErrorResponse`.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates a 404 Not Found response for a missing task id.
    #[must_use]
    pub fn task_not_found(task_id: i32) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            ApiError::with_details(
                "TASK_NOT_FOUND",
                "The specified task was not found",
                serde_json::json!({ "task_id": task_id }),
            ),
        )
    }

    /// Creates a 500 Internal Server Error response.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", message),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RepositoryError> for ApiErrorResponse {
    fn from(error: RepositoryError) -> Self {
        // Internal errors must not expose storage details to clients.
        tracing::error!(%error, "Repository operation failed");
        match error {
            RepositoryError::DatabaseError(_) => {
                Self::internal_error("An internal error occurred")
            }
        }
    }
}
