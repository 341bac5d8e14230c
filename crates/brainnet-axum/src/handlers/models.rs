//! Model catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use brainnet_core::services;
use brainnet_core::{
    ModelHealth, ModelInfo, ModelLoadRequest, ModelLoadResponse, ModelService, ModelStats,
};
use serde::Serialize;

use crate::error::HttpError;
use crate::extract::{Service, ValidJson};
use crate::state::AppState;

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// List every catalog model.
pub async fn available(Service(models): Service<ModelService>) -> Json<Vec<ModelInfo>> {
    Json(models.list_available())
}

/// List loaded models.
pub async fn loaded(Service(models): Service<ModelService>) -> Json<Vec<ModelInfo>> {
    Json(models.list_loaded())
}

/// Load a model.
///
/// The body is validated before the facade is resolved.
pub async fn load(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<ModelLoadRequest>,
) -> Result<Json<ModelLoadResponse>, HttpError> {
    let models = services::resolve::<ModelService>(&state.registry)?;
    Ok(Json(models.load(&request)))
}

/// Unload a model.
pub async fn unload(
    Service(models): Service<ModelService>,
    Path(model_name): Path<String>,
) -> Json<MessageResponse> {
    models.unload(&model_name);
    Json(MessageResponse::new(format!(
        "Model {model_name} unloaded successfully"
    )))
}

/// Get one model.
pub async fn info(
    Service(models): Service<ModelService>,
    Path(model_name): Path<String>,
) -> Result<Json<ModelInfo>, HttpError> {
    Ok(Json(models.get_info(&model_name)?))
}

/// Check whether a model is loaded.
pub async fn health(
    Service(models): Service<ModelService>,
    Path(model_name): Path<String>,
) -> Json<ModelHealth> {
    Json(models.health(&model_name))
}

/// Catalog counters.
pub async fn stats(Service(models): Service<ModelService>) -> Json<ModelStats> {
    Json(models.stats())
}

/// Load the configured default chat and embedding models.
pub async fn preload(
    State(state): State<AppState>,
    Service(models): Service<ModelService>,
) -> Json<Vec<ModelLoadResponse>> {
    let settings = &state.settings;
    Json(models.preload([
        settings.default_llm_model.as_str(),
        settings.default_embedding_model.as_str(),
    ]))
}

/// Unload every model.
pub async fn clear_cache(Service(models): Service<ModelService>) -> Json<MessageResponse> {
    let cleared = models.clear();
    Json(MessageResponse::new(format!(
        "Model cache cleared successfully ({cleared} unloaded)"
    )))
}
