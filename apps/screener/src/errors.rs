use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A file (or uploaded résumé set) was required but none was supplied.
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("An error occurred while processing the PDF '{file}': {reason}")]
    DocumentParse { file: String, reason: String },

    #[error("Model service error: {0}")]
    ModelService(#[from] LlmError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingInput(msg) => (
                StatusCode::BAD_REQUEST,
                "MISSING_INPUT",
                format!("Missing input: {msg}"),
            ),
            AppError::DocumentParse { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "DOCUMENT_PARSE_ERROR",
                self.to_string(),
            ),
            AppError::ModelService(e) => {
                tracing::error!("Model service error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_SERVICE_ERROR",
                    format!("The evaluation model could not be reached: {e}"),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
