//! Application errors
//!
//! Every failure leaves the server as the endpoint's `{error}` envelope
//! plus an HTTP status; the script contract has no richer shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use desk_store::StoreError;
use shared::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `?action=` value (or POST action) not part of the contract (400)
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Malformed request body (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Save presented a stale revision (409)
    #[error("Revision conflict: expected {expected}, found {found}")]
    Conflict { expected: u64, found: u64 },

    /// Storage failure (500)
    #[error("Storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::RevisionConflict { expected, found } => {
                AppError::Conflict { expected, found }
            }
            other => AppError::Storage(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownAction(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(status = %status, "request failed: {self}");
        }

        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
