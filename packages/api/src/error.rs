// ABOUTME: API error type and its HTTP mapping
// ABOUTME: Every failure leaves the server as a JSON body of the form {"error": "<message>"}

use archstudio_ai::ChatError;
use archstudio_core::ValidationError;
use archstudio_storage::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::response::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Chat(#[from] ChatError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Validation(_) | ApiError::InvalidQuery(_) | ApiError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Chat(err) => match err {
                ChatError::MissingMessage => StatusCode::BAD_REQUEST,
                ChatError::NoApiKey | ChatError::RequestFailed(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                ChatError::Upstream { status, .. } => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                }
                ChatError::InvalidResponse => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("Request failed with {}: {}", status, self);
        } else if status != StatusCode::NOT_FOUND {
            warn!("Request rejected with {}: {}", status, self);
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
