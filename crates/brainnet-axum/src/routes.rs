//! Route definitions and router construction.
//!
//! Both service variants serve their API under [`API_V1_PREFIX`]. The LLM
//! variant mounts one sub-router per surface through a [`RouterRegistry`];
//! the generic backend only has its status route.
//!
//! # Path Parameter Syntax
//! Axum 0.8 uses brace syntax for path parameters: `{model_name}`

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use brainnet_core::{AgentService, ChatService, DocumentService, RagService};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig, Variant};
use crate::handlers;
use crate::mounts::{RouteError, RouterRegistry};
use crate::state::AppState;

/// Version prefix shared by both variants.
pub const API_V1_PREFIX: &str = "/api/v1";

/// Build CORS layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            // Settings validation rejects these before startup.
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Model catalog routes, relative to the `models` mount.
pub(crate) fn model_routes() -> Router<AppState> {
    Router::new()
        .route("/available", get(handlers::models::available))
        .route("/loaded", get(handlers::models::loaded))
        .route("/load", post(handlers::models::load))
        .route("/unload/{model_name}", delete(handlers::models::unload))
        .route("/info/{model_name}", get(handlers::models::info))
        .route("/health/{model_name}", get(handlers::models::health))
        .route("/stats", get(handlers::models::stats))
        .route("/preload", post(handlers::models::preload))
        .route("/cache/clear", delete(handlers::models::clear_cache))
}

/// The five LLM surfaces in mount order.
pub fn llm_mounts() -> Result<RouterRegistry<AppState>, RouteError> {
    RouterRegistry::new()
        .mount(
            "/chat",
            &["chat"],
            Router::new().route("/", get(handlers::surfaces::index::<ChatService>)),
        )?
        .mount(
            "/rag",
            &["rag"],
            Router::new().route("/", get(handlers::surfaces::index::<RagService>)),
        )?
        .mount(
            "/agents",
            &["agents"],
            Router::new().route("/", get(handlers::surfaces::index::<AgentService>)),
        )?
        .mount(
            "/documents",
            &["documents"],
            Router::new()
                .route("/", get(handlers::surfaces::index::<DocumentService>))
                .route("/storage", get(handlers::surfaces::storage)),
        )?
        .mount("/models", &["models"], model_routes())
}

/// Create the LLM service router.
pub fn create_llm_router(
    state: AppState,
    cors_config: &CorsConfig,
) -> Result<Router, RouteError> {
    let api = llm_mounts()?.into_router(Router::new());

    Ok(Router::new()
        .route("/", get(handlers::root::welcome))
        .route("/health", get(handlers::root::health))
        .route("/health/detailed", get(handlers::root::detailed_health))
        .nest(API_V1_PREFIX, api.layer(build_cors_layer(cors_config)))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Create the generic backend router.
///
/// The status route answers with and without the trailing slash.
pub fn create_backend_router(state: AppState, cors_config: &CorsConfig) -> Router {
    let api: Router<AppState> = Router::new()
        .route(API_V1_PREFIX, get(handlers::root::api_status))
        .route(&format!("{API_V1_PREFIX}/"), get(handlers::root::api_status))
        .layer(build_cors_layer(cors_config));

    Router::new()
        .route("/health", get(handlers::root::health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the root router for `variant`.
pub fn build_root_router(
    variant: Variant,
    state: AppState,
    cors_config: &CorsConfig,
) -> Result<Router, RouteError> {
    match variant {
        Variant::Llm => create_llm_router(state, cors_config),
        Variant::Backend => Ok(create_backend_router(state, cors_config)),
    }
}

/// Convenience for tests and embedders that hold an owned context.
pub fn create_router(
    ctx: AxumContext,
    variant: Variant,
    cors_config: &CorsConfig,
) -> Result<Router, RouteError> {
    build_root_router(variant, Arc::new(ctx), cors_config)
}
