//! Sub-router registration.
//!
//! A [`RouterRegistry`] collects `(prefix, tags, router)` mounts during
//! startup and folds them into one router. Once folded the set is fixed.

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use thiserror::Error;
use tower_http::set_header::SetResponseHeaderLayer;

/// Response header listing the tags of the mount that served a request.
pub static API_TAGS_HEADER: HeaderName = HeaderName::from_static("x-api-tags");

/// Rejected mount registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("prefix `{0}` is already mounted")]
    DuplicatePrefix(String),

    #[error("invalid mount prefix `{0}`: must start with `/`, not be `/`, and not end with `/`")]
    InvalidPrefix(String),

    #[error("invalid tag `{0}`: tags must be non-empty visible ASCII without commas")]
    InvalidTag(String),
}

/// One registered sub-router.
#[derive(Debug)]
pub struct Mount<S = ()> {
    pub prefix: String,
    pub tags: Vec<String>,
    pub router: Router<S>,
}

/// Ordered, prefix-unique collection of mounts.
#[derive(Debug)]
pub struct RouterRegistry<S = ()> {
    mounts: Vec<Mount<S>>,
}

impl<S> Default for RouterRegistry<S> {
    fn default() -> Self {
        Self { mounts: Vec::new() }
    }
}

impl<S> RouterRegistry<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `router` under `prefix`.
    pub fn mount(
        mut self,
        prefix: &str,
        tags: &[&str],
        router: Router<S>,
    ) -> Result<Self, RouteError> {
        if !prefix.starts_with('/') || prefix.len() < 2 || prefix.ends_with('/') {
            return Err(RouteError::InvalidPrefix(prefix.to_string()));
        }
        if self.mounts.iter().any(|m| m.prefix == prefix) {
            return Err(RouteError::DuplicatePrefix(prefix.to_string()));
        }
        if let Some(bad) = tags.iter().find(|t| !is_valid_tag(t)) {
            return Err(RouteError::InvalidTag((*bad).to_string()));
        }

        tracing::debug!(prefix, tags = ?tags, "Mounting router");
        self.mounts.push(Mount {
            prefix: prefix.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            router,
        });
        Ok(self)
    }

    /// Registered mounts in registration order.
    pub fn mounts(&self) -> &[Mount<S>] {
        &self.mounts
    }

    /// Fold every mount into `base`, tagging each mount's responses.
    pub fn into_router(self, base: Router<S>) -> Router<S> {
        self.mounts.into_iter().fold(base, |acc, mount| {
            // Tags were checked in `mount`, so the header value is valid.
            let tagged = match HeaderValue::from_str(&mount.tags.join(",")) {
                Ok(value) => mount
                    .router
                    .layer(SetResponseHeaderLayer::overriding(API_TAGS_HEADER.clone(), value)),
                Err(_) => mount.router,
            };
            acc.nest(&mount.prefix, tagged)
        })
    }
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .bytes()
            .all(|b| b.is_ascii_graphic() && b != b',')
}
