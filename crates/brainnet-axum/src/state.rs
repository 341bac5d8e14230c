//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext`; cloning it never clones the registry.
pub type AppState = Arc<AxumContext>;
