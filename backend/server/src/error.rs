use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::{ErrorBody, ValidationError, schema::EMAIL_FIELD};
use thiserror::Error;
use tracing::{error, warn};

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("{0}")]
    InvalidEmail(#[from] ValidationError),

    #[error("Email already subscribed")]
    Conflict,

    #[error("Internal error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Conflict { .. } => AppError::Conflict,
            other => AppError::Storage(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MalformedPayload => (StatusCode::BAD_REQUEST, ErrorBody::new(self.to_string())),
            AppError::InvalidEmail(_) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::for_field(self.to_string(), EMAIL_FIELD),
            ),
            AppError::Conflict => {
                warn!("Duplicate subscriber rejected");
                (StatusCode::CONFLICT, ErrorBody::new(self.to_string()))
            }
            AppError::Storage(err) => {
                error!("Storage failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
