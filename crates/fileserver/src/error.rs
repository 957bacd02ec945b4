//! Boundary errors and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content::ResolveError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    /// Map a resolver failure, naming the missing resource on 404
    pub fn from_resolve(err: ResolveError, resource: &str) -> Self {
        match err {
            ResolveError::NotFound => AppError::NotFound(format!("{} not found", resource)),
            other => other.into(),
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Traversal | ResolveError::OutsideRoot => {
                AppError::Forbidden("Access denied".to_string())
            }
            ResolveError::NotFound => AppError::NotFound("Not found".to_string()),
            ResolveError::Io(e) => AppError::Internal(format!("Failed to resolve path: {}", e)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
