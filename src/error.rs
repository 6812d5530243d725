//! Error handling module
//!
//! Provides the error type returned by every route handler and its mapping to
//! HTTP responses.

use crate::db::DbError;
use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data access failed while {context}: {source}")]
    DataAccess {
        context: String,
        #[source]
        source: DbError,
    },
}

/// Body of 400 and 404 responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message })).into_response()
            }
            AppError::DataAccess { context, source } => {
                // Detail stays in the logs
                error!(error = ?source, "Error {}: {}", context, source);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

/// Attaches the failing operation to a data-access error.
pub trait DbResultExt<T> {
    fn with_context<F>(self, context: F) -> ApiResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> DbResultExt<T> for Result<T, DbError> {
    fn with_context<F>(self, context: F) -> ApiResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| AppError::DataAccess {
            context: context(),
            source,
        })
    }
}

/// Helper function to create a validation error
pub fn validation_error(msg: impl Into<String>) -> AppError {
    AppError::Validation(msg.into())
}

/// Helper function to create a not found error
pub fn not_found_error(msg: impl Into<String>) -> AppError {
    AppError::NotFound(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_is_structured() {
        let response = not_found_error("Student not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, r#"{"error":"Student not found"}"#);
    }

    #[tokio::test]
    async fn test_validation_is_bad_request() {
        let response = validation_error("q is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, r#"{"error":"q is required"}"#);
    }

    #[tokio::test]
    async fn test_data_access_hides_detail() {
        let result: Result<(), DbError> = Err(DbError::Decode("column 'secret' is bad".to_string()));
        let response = result
            .with_context(|| "fetching student with ID 3".to_string())
            .unwrap_err()
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "Server error");
    }
}
