//! HTTP request handlers.
//!
//! Each submodule covers one API area. Handlers are thin: they take their
//! facades from the extractors in [`crate::extract`] and delegate.

pub mod models;
pub mod root;
pub mod surfaces;
