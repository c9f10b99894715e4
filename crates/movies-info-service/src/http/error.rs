use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_core::StorageError;
use thiserror::Error;
use tracing::{error, warn};

use crate::error::ServiceError;
use crate::validation::ValidationError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Maps service failures onto HTTP responses.
///
/// Validation failures are the only errors with a body: the sorted,
/// comma-joined list of violated constraints as plain text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(ValidationError),
    #[error("movie info not found: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(StorageError),
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Validation(err) => Self::Validation(err),
            ServiceError::NotFound(id) => Self::NotFound(id),
            ServiceError::Storage(err) => Self::Storage(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                let body = err.to_string();
                warn!(error = %body, "movie info failed validation");
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::Storage(err) => {
                error!(error = %err, "storage operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
