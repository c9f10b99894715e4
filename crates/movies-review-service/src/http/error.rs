use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_core::StorageError;
use thiserror::Error;
use tracing::error;

use crate::error::ServiceError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("review not found: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(StorageError),
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::NotFound(id) => Self::NotFound(id),
            ServiceError::Storage(err) => Self::Storage(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            AppError::Storage(err) => {
                error!(error = %err, "storage operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
