use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::auth::repo_types::StoreError;

/// Every failure a request can end in. The 4xx bodies are fixed JSON strings
/// clients match on literally.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("username and password required")]
    MissingCredentials,
    #[error("username taken")]
    UsernameTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("token required")]
    TokenRequired,
    #[error("token invalid")]
    TokenInvalid,
    #[error(transparent)]
    Store(StoreError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UsernameTaken => ApiError::UsernameTaken,
            other => ApiError::Store(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCredentials | ApiError::UsernameTaken => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidCredentials | ApiError::TokenRequired | ApiError::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Store(_) | ApiError::Internal(_) => {
                error!(error = %self, "request failed");
                (status, Json(json!({ "message": self.to_string() }))).into_response()
            }
            rejection => (status, Json(rejection.to_string())).into_response(),
        }
    }
}
