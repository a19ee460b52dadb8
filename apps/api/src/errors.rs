use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Client-input problems map to 400; document parse failures and anything
/// unexpected map to 500 with a generic message — internal detail is logged,
/// never returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Document parse failure: {0}")]
    ParseFailure(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Unsupported(ext) => AppError::UnsupportedFileType(ext),
            ExtractError::Parse(detail) => AppError::ParseFailure(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedFileType(_) => (
                StatusCode::BAD_REQUEST,
                "Unsupported file type. Use PDF or DOCX.".to_string(),
            ),
            AppError::ParseFailure(detail) => {
                tracing::error!("Document parse failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to parse document".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
