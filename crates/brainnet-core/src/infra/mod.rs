//! Process-wide infrastructure handles.
//!
//! These are the long-lived singletons created once at startup and shared
//! read-only by every request.

mod database;
mod health;

pub use database::{Backend, DEFAULT_CACHE_TTL, DatabaseManager};
pub use health::{HealthService, HealthStatus};
