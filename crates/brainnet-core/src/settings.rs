//! Settings domain types and validation.
//!
//! Settings come from environment variables (the CLI loads `.env` first).
//! Every loader goes through a lookup function so tests can feed a map
//! instead of touching the process environment.

use serde::{Deserialize, Serialize};

/// Default port for the LLM service.
pub const DEFAULT_PORT: u16 = 8001;

/// Default bucket for the object-storage facade.
pub const DEFAULT_BUCKET: &str = "brain-net-documents";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error", "critical"];

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub debug: bool,
    /// Log level name (`INFO`, `DEBUG`, ...).
    pub log_level: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub database: DatabaseSettings,
    pub storage: StorageSettings,
    pub default_llm_model: String,
    pub default_embedding_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Brain_Net LLM Service".to_string(),
            debug: false,
            log_level: "INFO".to_string(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8000".to_string(),
            ],
            database: DatabaseSettings::default(),
            storage: StorageSettings::default(),
            default_llm_model: "gpt-3.5-turbo".to_string(),
            default_embedding_model: "text-embedding-ada-002".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, falling back to defaults per key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| SettingsError::InvalidValue {
                key: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let debug = match lookup("LLM_DEBUG") {
            Some(raw) => parse_bool("LLM_DEBUG", raw)?,
            None => defaults.debug,
        };

        let cors_origins = lookup("CORS_ORIGINS").map_or(defaults.cors_origins, |raw| {
            raw.split(',').map(|o| o.trim().to_string()).collect()
        });

        Ok(Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            debug,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            database: DatabaseSettings::from_lookup(&lookup),
            storage: StorageSettings::from_lookup(&lookup),
            default_llm_model: lookup("DEFAULT_LLM_MODEL").unwrap_or(defaults.default_llm_model),
            default_embedding_model: lookup("DEFAULT_EMBEDDING_MODEL")
                .unwrap_or(defaults.default_embedding_model),
        })
    }

    /// The log level as a `tracing` filter directive.
    pub fn tracing_directive(&self) -> &'static str {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "warn" | "warning" => "warn",
            "error" | "critical" => "error",
            _ => "info",
        }
    }
}

/// Connection strings for the backing stores.
///
/// The service layer only carries these; opening connections belongs to the
/// stores themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// `PostgreSQL` URL. Unset means the relational store is not configured.
    pub database_url: Option<String>,
    pub elasticsearch_url: String,
    pub neo4j_uri: String,
    pub redis_url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            database_url: None,
            elasticsearch_url: "http://localhost:9200".to_string(),
            neo4j_uri: "bolt://localhost:7687".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
        }
    }
}

impl DatabaseSettings {
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            elasticsearch_url: lookup("ELASTICSEARCH_URL").unwrap_or(defaults.elasticsearch_url),
            neo4j_uri: lookup("NEO4J_URI").unwrap_or(defaults.neo4j_uri),
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
        }
    }
}

/// Object-storage (`MinIO`) connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    pub endpoint: String,
    pub access_key: String,
    #[serde(skip_serializing, default)]
    pub secret_key: String,
    pub bucket: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            endpoint: "localhost:9000".to_string(),
            access_key: "minioadmin".to_string(),
            secret_key: "minioadmin".to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
        }
    }
}

impl StorageSettings {
    /// Load storage settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            endpoint: lookup("MINIO_ENDPOINT").unwrap_or(defaults.endpoint),
            access_key: lookup("MINIO_ACCESS_KEY").unwrap_or(defaults.access_key),
            secret_key: lookup("MINIO_SECRET_KEY").unwrap_or(defaults.secret_key),
            bucket: lookup("MINIO_BUCKET").unwrap_or(defaults.bucket),
        }
    }
}

fn parse_bool(key: &'static str, raw: String) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(SettingsError::InvalidValue { key, value: raw }),
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Application name cannot be empty")]
    EmptyAppName,

    #[error("Port should be >= 1024 (privileged ports require root), got {0}")]
    InvalidPort(u16),

    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),

    #[error("CORS origins cannot contain an empty entry")]
    EmptyCorsOrigin,

    #[error("CORS origin is not a valid header value: {0:?}")]
    InvalidCorsOrigin(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.app_name.trim().is_empty() {
        return Err(SettingsError::EmptyAppName);
    }

    if settings.port < 1024 {
        return Err(SettingsError::InvalidPort(settings.port));
    }

    if !LOG_LEVELS.contains(&settings.log_level.to_ascii_lowercase().as_str()) {
        return Err(SettingsError::UnknownLogLevel(settings.log_level.clone()));
    }

    if settings.cors_origins.iter().any(|o| o.trim().is_empty()) {
        return Err(SettingsError::EmptyCorsOrigin);
    }

    if let Some(bad) = settings.cors_origins.iter().find(|o| !is_header_value(o)) {
        return Err(SettingsError::InvalidCorsOrigin(bad.clone()));
    }

    Ok(())
}

/// Visible ASCII or tab, the bytes an HTTP header value may carry.
fn is_header_value(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b == b'\t' || (b' '..=b'~').contains(&b))
}
