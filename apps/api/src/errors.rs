use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mentorship::matcher::MatchError;

/// Message shown for any failure to obtain a usable match from the model.
pub const MATCH_FAILURE_MESSAGE: &str =
    "An error occurred while matching mentors. Please try again later.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),
}

impl From<MatchError> for AppError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::InvalidInput(msg) => AppError::Validation(msg),
            MatchError::Provider(e) => AppError::Llm(e.to_string()),
            MatchError::SchemaViolation(v) => AppError::SchemaViolation(v.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    MATCH_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::SchemaViolation(msg) => {
                tracing::error!("Schema violation: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_VIOLATION",
                    MATCH_FAILURE_MESSAGE.to_string(),
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
