//! API error handling
//!
//! Author: hephaex@gmail.com

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use lingo_core::LingoError;

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error code
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

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn parser_error() -> Self {
        Self::new("PARSER_ERROR", "Sentence parser failed")
    }

    pub fn internal_error() -> Self {
        Self::new("INTERNAL_ERROR", "Internal server error")
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Parser(String),
    Internal(String),
}

impl AppError {
    /// Query parameter absent or blank
    pub fn missing_param(name: &str) -> Self {
        AppError::BadRequest(format!("missing required query parameter '{name}'"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::bad_request(msg)),
            AppError::Parser(msg) => (
                StatusCode::BAD_GATEWAY,
                ApiError::parser_error().with_details(msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal_error().with_details(msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<LingoError> for AppError {
    fn from(err: LingoError) -> Self {
        match err {
            LingoError::ParserError(msg) => AppError::Parser(msg),
            LingoError::InvalidDocument(msg) => {
                AppError::Parser(format!("Invalid parse returned: {msg}"))
            }
            LingoError::ValidationError(msg) => AppError::BadRequest(msg),
            LingoError::LexiconError(msg) => AppError::Internal(format!("Lexicon error: {msg}")),
            LingoError::ConfigError(msg) => AppError::Internal(format!("Configuration error: {msg}")),
            other => AppError::Internal(other.to_string()),
        }
    }
}
