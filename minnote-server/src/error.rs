//! HTTP-facing error type and its mapping from core errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use minnote_core::MinnoteError;
use thiserror::Error;
use tracing::error;

/// Errors a handler can return; each maps to one status code and a JSON
/// `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<MinnoteError> for ApiError {
    fn from(err: MinnoteError) -> Self {
        match err {
            MinnoteError::NoteNotFound(_) => ApiError::NotFound(err.to_string()),
            MinnoteError::DuplicateNote(_) => ApiError::Conflict(err.to_string()),
            MinnoteError::Io(_) | MinnoteError::Json(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            error!("request failed: {message}");
        }

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
