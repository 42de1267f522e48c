use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors raised by the todo store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No todo with the given id exists
    #[error("Can't find todo with id {0}")]
    NotFound(String),
    /// Reading or writing the backing file failed
    #[error("todo file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file holds malformed JSON, or the list failed to serialize
    #[error("todo file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The backing file was released by `close`
    #[error("todo store is closed")]
    Closed,
}

impl StoreError {
    /// Whether this error is caused by client input rather than storage
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Custom error type for API endpoints
///
/// Both variants render as a plain-text body holding the message. Content
/// headers for `/todos` are applied by the router.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed client input
    BadRequest(String),
    /// The store could not persist; the process is shutting down
    Storage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Storage(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
