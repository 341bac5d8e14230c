//! Model catalog facade.
//!
//! Loaded-model marks live in the database manager's cache so they survive
//! the per-request lifetime of this facade.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::facade::{ServiceKind, database_backed};
use crate::domain::{ModelInfo, ModelLoadRequest, ModelLoadResponse, builtin_catalog};
use crate::error::CoreError;
use crate::infra::DatabaseManager;

const LOADED_PREFIX: &str = "loaded_model:";

/// Health of a single model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHealth {
    pub model_name: String,
    pub healthy: bool,
    pub status: String,
    /// Usage is not tracked yet; always `None`.
    pub last_used: Option<DateTime<Utc>>,
    pub requests_processed: u64,
}

/// Catalog-wide counters.
///
/// Usage counters are placeholders until requests are metered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub total_models_available: usize,
    pub models_loaded: usize,
    pub memory_usage: String,
    pub total_requests: u64,
    pub average_response_time: f64,
}

/// Model catalog operations.
#[derive(Debug)]
pub struct ModelService {
    db: Arc<DatabaseManager>,
    id: Uuid,
}

database_backed!(ModelService, ServiceKind::Models);

impl ModelService {
    /// Every catalog entry, with `is_loaded` reflecting current state.
    pub fn list_available(&self) -> Vec<ModelInfo> {
        builtin_catalog()
            .into_iter()
            .map(|model| {
                let loaded = self.is_loaded(&model.name);
                model.with_loaded(loaded)
            })
            .collect()
    }

    /// Catalog entries currently loaded.
    pub fn list_loaded(&self) -> Vec<ModelInfo> {
        self.list_available()
            .into_iter()
            .filter(|model| model.is_loaded)
            .collect()
    }

    /// One catalog entry by name.
    pub fn get_info(&self, model_name: &str) -> Result<ModelInfo, CoreError> {
        self.list_available()
            .into_iter()
            .find(|model| model.name == model_name)
            .ok_or_else(|| CoreError::NotFound(format!("Model {model_name} not found")))
    }

    /// Mark a catalog model as loaded.
    ///
    /// Unknown models produce an unsuccessful response rather than an error.
    pub fn load(&self, request: &ModelLoadRequest) -> ModelLoadResponse {
        let name = request.model_name.as_str();
        let started = Instant::now();

        if !builtin_catalog().iter().any(|model| model.name == name) {
            return ModelLoadResponse::failed(name, format!("Model {name} is not in the catalog"));
        }

        if self.is_loaded(name) && !request.force_reload {
            return ModelLoadResponse::loaded(name, format!("Model {name} is already loaded"), 0.0);
        }

        let config = request.config.clone().map_or_else(
            || "{}".to_string(),
            |config| serde_json::Value::from_iter(config).to_string(),
        );
        self.db.cache_set(loaded_key(name), config, None);

        let load_time = started.elapsed().as_secs_f64();
        tracing::info!(
            target: "brainnet.models",
            model_name = name,
            load_time_seconds = load_time,
            force_reload = request.force_reload,
            "model_loaded"
        );

        ModelLoadResponse::loaded(name, format!("Model {name} loaded successfully"), load_time)
    }

    /// Clear a loaded mark. Unknown or unloaded names are a no-op.
    pub fn unload(&self, model_name: &str) {
        if self.db.cache_delete(&loaded_key(model_name)) {
            tracing::info!(target: "brainnet.models", model_name, "model_unloaded");
        }
    }

    /// Load each named model, skipping ones already loaded.
    pub fn preload<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<ModelLoadResponse> {
        names
            .into_iter()
            .map(|name| self.load(&ModelLoadRequest::new(name)))
            .collect()
    }

    /// Drop every loaded mark. Returns how many were cleared.
    pub fn clear(&self) -> usize {
        let keys = self.db.cache_keys(LOADED_PREFIX);
        let cleared = keys.iter().filter(|key| self.db.cache_delete(key)).count();
        tracing::info!(target: "brainnet.models", cleared, "model_cache_cleared");
        cleared
    }

    pub fn health(&self, model_name: &str) -> ModelHealth {
        let loaded = self.is_loaded(model_name);
        ModelHealth {
            model_name: model_name.to_string(),
            healthy: loaded,
            status: if loaded { "loaded" } else { "not_loaded" }.to_string(),
            last_used: None,
            requests_processed: 0,
        }
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            total_models_available: builtin_catalog().len(),
            models_loaded: self.list_loaded().len(),
            memory_usage: "N/A".to_string(),
            total_requests: 0,
            average_response_time: 0.0,
        }
    }

    fn is_loaded(&self, model_name: &str) -> bool {
        self.db.cache_get(&loaded_key(model_name)).is_some()
    }
}

fn loaded_key(model_name: &str) -> String {
    format!("{LOADED_PREFIX}{model_name}")
}
