//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error code
    #[schema(example = "NOT_FOUND")]
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new("NOT_FOUND", format!("{resource} not found"))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn internal_error() -> Self {
        Self::new("INTERNAL_ERROR", "Internal server error")
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    UnsupportedScope(String),
    Conflict(String),
    Pipeline(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::not_found(&msg)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::bad_request(msg)),
            AppError::UnsupportedScope(scope) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("UNSUPPORTED_SCOPE", format!("Unsupported scope: {scope}"))
                    .with_details("expected 'sentence' or 'paragraph'"),
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ApiError::conflict(msg)),
            AppError::Pipeline(msg) => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("PIPELINE_ERROR", "Pipeline run failed").with_details(msg),
            ),
            AppError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::internal_error().with_details(msg),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<ng_core::NgError> for AppError {
    fn from(err: ng_core::NgError) -> Self {
        use ng_core::NgError;

        match err {
            NgError::UnsupportedScope(scope) => AppError::UnsupportedScope(scope),
            NgError::NotFound(msg) => AppError::NotFound(msg),
            NgError::Conflict(msg) => AppError::Conflict(msg),
            NgError::Pipeline(msg) => AppError::Pipeline(msg),
            NgError::Tagger(msg) => AppError::Internal(format!("Tagger error: {msg}")),
            NgError::Config(msg) => AppError::Internal(format!("Configuration error: {msg}")),
            NgError::Io(err) => AppError::Internal(format!("IO error: {err}")),
            NgError::Serialization(msg) => AppError::Internal(format!("Serialization error: {msg}")),
            NgError::Other(err) => AppError::Internal(err.to_string()),
        }
    }
}
