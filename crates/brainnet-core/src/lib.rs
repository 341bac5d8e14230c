//! Core of the Brain_Net service layer: model schemas and their validation,
//! settings, the shared infrastructure handles, and the service registry and
//! resolvers that build per-request facades.
//!
//! Nothing here depends on an HTTP framework. See `brainnet-axum` for the
//! adapter.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod infra;
pub mod schema;
pub mod services;
pub mod settings;

#[cfg(test)]
mod test_utils;

pub use domain::{
    ModelInfo, ModelLoadRequest, ModelLoadResponse, ModelProvider, ModelType, builtin_catalog,
};
pub use error::CoreError;
pub use infra::{Backend, DEFAULT_CACHE_TTL, DatabaseManager, HealthService, HealthStatus};
pub use schema::{SchemaError, parse_json};
pub use services::{
    AgentService, ChatService, DatabaseBacked, DocumentService, MinioService, ModelHealth,
    ModelService, ModelStats, RagService, ServiceKind, ServiceRegistry,
};
pub use settings::{
    DEFAULT_BUCKET, DEFAULT_PORT, DatabaseSettings, Settings, SettingsError, StorageSettings,
    validate_settings,
};
