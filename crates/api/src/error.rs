use aletheia_core::error::CoreError;
use aletheia_store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for anything
/// the store reports. Implements [`IntoResponse`] to produce the flat
/// `{ok:false, error}` JSON body every endpoint uses on failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (validation, authentication, unknown catalog key).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the store. Not classified further: network
    /// trouble, rejected credentials, and constraint violations all
    /// surface the same way, carrying the store's message.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
            },
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = json!({
            "ok": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
