//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures store failures to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, ApiError>`; a failed operation yields a response carrying the
//! error and no partial data. Bootstrap failures are not represented here —
//! they abort in `main` before the server starts accepting requests.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the API server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing required input field. Reserved: the current
    /// operation set validates nothing beyond type shape, which the JSON
    /// extractor already enforces.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The persistence engine failed to create or read a row.
    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture store failures to Sentry; they are still recoverable and
        // only fail the single operation that hit them.
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Validation(msg) => msg.clone(),
            Self::Store(_) => "Internal server error".to_string(),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Validation("name is required".to_string());
        assert_eq!(err.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_api_error_status_codes() {
        fn get_status(err: ApiError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(ApiError::Validation("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Store(RepositoryError::Database(
                sqlx::Error::PoolClosed
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
