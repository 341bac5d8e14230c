//! Core domain types.
//!
//! # Structure
//!
//! - `model` - Model catalog and load types (`ModelInfo`, `ModelLoadRequest`, ...)
//! - `catalog` - The built-in model catalog

mod catalog;
mod model;

pub use catalog::builtin_catalog;
pub use model::{ModelInfo, ModelLoadRequest, ModelLoadResponse, ModelProvider, ModelType};
