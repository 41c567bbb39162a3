//! Error types for the notes server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::notes::NoteId;

// == App Error Enum ==
/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum AppError {
    /// No note exists with the requested id
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Cache Error Enum ==
/// Failures reported by a cache transport.
///
/// None of these ever reach an HTTP client through the recent-notes
/// tracker; they are logged and treated as an empty list.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend could not be reached or rejected the command
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// Backend did not answer within the configured timeout
    #[error("Cache timed out after {0}ms")]
    Timeout(u64),

    /// Key or value rejected before reaching the backend
    #[error("Invalid cache request: {0}")]
    InvalidRequest(String),

    /// Stored value could not be decoded
    #[error("Malformed cache value: {0}")]
    Malformed(String),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Malformed(err.to_string())
    }
}

// == Result Type Aliases ==
/// Convenience Result type for the notes server.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type for cache transport calls.
pub type CacheResult<T> = std::result::Result<T, CacheError>;
