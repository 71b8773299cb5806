use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Request-path errors with automatic HTTP status mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body missing, malformed, or with wrong field types (422).
    #[error("invalid request body: {0}")]
    Validation(#[from] JsonRejection),

    /// The database could not be reached (500).
    #[error("database unreachable: {0}")]
    Connection(#[source] sqlx::Error),

    /// The database rejected a statement, e.g. a constraint violation (500).
    #[error("statement rejected by database: {0}")]
    Persistence(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(e),
            _ => Self::Persistence(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "validation_error",
                    "message": rejection.body_text()
                }),
            ),
            Self::Connection(e) => {
                // Log the actual error, return a generic message.
                tracing::error!(error = %e, "database unreachable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "connection_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
            Self::Persistence(e) => {
                tracing::error!(error = %e, "statement rejected by database");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "persistence_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
