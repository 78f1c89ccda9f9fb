use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ingest::ExtractError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"error": "<message>"}` where the message is the
/// underlying failure text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("{0}")]
    Extraction(String),

    #[error("{0}")]
    Generation(String),

    /// Carries the rejected format for logging; the response text is fixed.
    #[error("Unsupported format")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::UnsupportedFileType(_)
            | AppError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_)
            | AppError::Generation(_)
            | AppError::Render(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::UnsupportedFileType(filename) => AppError::UnsupportedFileType(filename),
            other => AppError::Extraction(other.to_string()),
        }
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::UnsupportedFormat(format) => AppError::UnsupportedFormat(format),
            other => AppError::Render(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::UnsupportedFormat(format) => {
                tracing::warn!("Rejected download format {format:?}")
            }
            e if status.is_server_error() => tracing::error!("{e}"),
            e => tracing::warn!("Rejected request: {e}"),
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
