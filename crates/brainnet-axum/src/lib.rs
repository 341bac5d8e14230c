//! Axum web adapter for Brain_Net.
//!
//! Serves either the generic Brain_Net API or the LLM service. The
//! composition root is [`bootstrap`]; routers are built in [`routes`] from
//! the mounts in [`mounts`]; handlers obtain their services through the
//! extractors in [`extract`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the integration tests only
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mounts;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, Variant, bootstrap, start_server};
pub use error::HttpError;
pub use mounts::{API_TAGS_HEADER, Mount, RouteError, RouterRegistry};
pub use routes::{
    API_V1_PREFIX, build_root_router, create_backend_router, create_llm_router, create_router,
};
pub use state::AppState;
