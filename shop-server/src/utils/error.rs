//! HTTP error handling
//!
//! Every failure leaves the API the same way: status 500 with
//! `{"message": "<diagnostic>"}`. The error kind is kept in [`AppError`]
//! and written to the log, just not exposed on the wire.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::StoreError;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl AppError {
    /// Error kind label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Store(err) => err.kind(),
            AppError::InvalidBody(_) => "invalid_body",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!(kind = self.kind(), error = %message, "Request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Handler result type
pub type AppResult<T> = Result<T, AppError>;
