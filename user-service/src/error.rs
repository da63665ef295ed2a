use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use users_shared::models::{messages, ApiResponse};
use users_shared::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn user_not_found() -> Self {
        AppError::NotFound(messages::USER_NOT_FOUND.into())
    }

    pub fn required_fields() -> Self {
        AppError::BadRequest(messages::REQUIRED_FIELDS.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                tracing::debug!("Store lookup missed user {}", id);
                AppError::user_not_found()
            }
            StoreError::Validation(reason) => {
                tracing::debug!("Store rejected input: {}", reason);
                AppError::required_fields()
            }
            StoreError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound(msg) => {
                tracing::warn!("Not found error: {}", msg);
                msg
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request error: {}", msg);
                msg
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                msg
            }
        };

        tracing::info!("Returning error response: status={}, message={}", status, message);
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
