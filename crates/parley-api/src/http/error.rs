//! Application error type mapping to HTTP status codes and the
//! `{"error": message}` envelope.
//!
//! Validation-class failures echo their display text to the caller.
//! Anything touching storage, hashing, or the reply provider surfaces as
//! a generic "server error"; the detail goes to the log, never the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use parley_types::error::{CredentialError, TranscriptError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Registration/login failures.
    Credential(CredentialError),
    /// Transcript operation failures.
    Transcript(TranscriptError),
    /// Missing or invalid bearer token.
    Unauthenticated(&'static str),
    /// Generic internal error.
    Internal(String),
}

impl From<CredentialError> for AppError {
    fn from(e: CredentialError) -> Self {
        AppError::Credential(e)
    }
}

impl From<TranscriptError> for AppError {
    fn from(e: TranscriptError) -> Self {
        AppError::Transcript(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Credential(
                e @ (CredentialError::MissingFields
                | CredentialError::EmailTaken
                | CredentialError::InvalidCredentials),
            ) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Credential(e) => {
                tracing::error!(error = %e, "credential operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
            AppError::Transcript(e @ TranscriptError::EmptyContent) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Transcript(e) => {
                tracing::error!(error = %e, "transcript operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
            AppError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, (*msg).to_string()),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
