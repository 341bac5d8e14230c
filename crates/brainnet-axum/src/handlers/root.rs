//! Identity and liveness endpoints.

use axum::Json;
use axum::extract::State;
use brainnet_core::{HealthStatus, ModelService};

use crate::dto::{ApiStatusDto, DetailedHealthDto, LlmStatusDto, WelcomeDto};
use crate::extract::{Database, Health, Service};
use crate::state::AppState;

/// Static status of the generic API.
pub async fn api_status() -> Json<ApiStatusDto> {
    Json(ApiStatusDto::operational())
}

/// Welcome payload of the LLM service.
pub async fn welcome() -> Json<WelcomeDto> {
    Json(WelcomeDto::default())
}

/// Basic liveness.
pub async fn health(Health(health): Health) -> Json<HealthStatus> {
    Json(health.liveness())
}

/// Liveness plus backing-store configuration and loaded-model count.
pub async fn detailed_health(
    State(state): State<AppState>,
    Database(db): Database,
    Health(health): Health,
    Service(models): Service<ModelService>,
) -> Json<DetailedHealthDto> {
    let llm_status = LlmStatusDto::new(models.stats().models_loaded, &state.settings, &db);
    Json(DetailedHealthDto::new(health.liveness(), &db, llm_status))
}
