//! Core error type.
//!
//! Adapters map this to their own error types (HTTP status codes, CLI exit
//! codes).

use thiserror::Error;

use crate::schema::SchemaError;
use crate::settings::SettingsError;

/// Core error type for semantic domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A process-wide singleton was requested before startup registered it.
    #[error("application state is missing `{0}`")]
    MissingState(&'static str),

    /// Inbound payload failed schema checks.
    #[error(transparent)]
    Validation(#[from] SchemaError),

    /// Settings failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error detected at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
