//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and `SchemaError` to HTTP status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brainnet_core::{CoreError, SchemaError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body failed schema checks.
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// A process-wide singleton was not registered at startup.
    #[error("Application state is missing `{0}`")]
    MissingState(&'static str),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error_type, metadata) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, None, None),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, None, None),
            Self::Validation { field, .. } => (
                StatusCode::BAD_REQUEST,
                Some("VALIDATION_ERROR"),
                field
                    .as_ref()
                    .map(|field| serde_json::json!({ "field": field })),
            ),
            Self::MissingState(key) => {
                tracing::error!(key, "Request reached a handler without application state");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Some("MISSING_STATE"),
                    Some(serde_json::json!({ "key": key })),
                )
            }
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, None, None),
        };

        let body = ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
            error_type,
            metadata,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingState(key) => Self::MissingState(key),
            CoreError::Validation(schema_err) => schema_err.into(),
            CoreError::Settings(settings_err) => Self::BadRequest(settings_err.to_string()),
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::Configuration(msg) => Self::Internal(format!("Config: {msg}")),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<SchemaError> for HttpError {
    fn from(err: SchemaError) -> Self {
        Self::Validation {
            field: err.field().map(ToString::to_string),
            message: err.to_string(),
        }
    }
}
