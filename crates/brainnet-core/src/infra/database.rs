//! Shared database manager.
//!
//! One `DatabaseManager` exists per process. It is created by the composition
//! root, initialized once, handed to every facade through an `Arc`, and
//! closed at shutdown. It carries the backing-store configuration and a small
//! in-process TTL cache that facades use for cross-request state.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::settings::DatabaseSettings;

/// Default time-to-live for cache entries.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Backing stores the service layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Backend {
    Postgres,
    Elasticsearch,
    Neo4j,
    Redis,
    Minio,
}

impl Backend {
    /// Every known backing store, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

#[derive(Debug)]
struct CacheEntry {
    value: String,
    /// `None` never expires.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// Process-wide handle to the backing stores.
#[derive(Debug)]
pub struct DatabaseManager {
    settings: DatabaseSettings,
    initialized: AtomicBool,
    cache: RwLock<HashMap<String, CacheEntry>>,
}

impl DatabaseManager {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            initialized: AtomicBool::new(false),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub const fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }

    /// Mark the manager ready and report which stores are configured.
    pub fn initialize(&self) {
        let configured = self.configured_backends();
        let missing: Vec<Backend> = Backend::iter()
            .filter(|b| !configured.contains(b))
            .collect();

        tracing::info!(
            target: "brainnet.database",
            configured = ?configured,
            "Database manager initialized"
        );
        if !missing.is_empty() {
            tracing::warn!(
                target: "brainnet.database",
                missing = ?missing,
                "Some backing stores are not configured"
            );
        }

        self.initialized.store(true, Ordering::Release);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Backing stores that have connection settings.
    ///
    /// Everything except `PostgreSQL` has a default endpoint, so only the
    /// relational store can be absent.
    pub fn configured_backends(&self) -> Vec<Backend> {
        Backend::iter()
            .filter(|b| *b != Backend::Postgres || self.settings.database_url.is_some())
            .collect()
    }

    /// Release everything held by the manager.
    pub fn close_all(&self) {
        tracing::info!(target: "brainnet.database", "Closing all database connections...");
        self.write_cache().clear();
        self.initialized.store(false, Ordering::Release);
        tracing::info!(target: "brainnet.database", "All database connections closed");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Cache
    // ─────────────────────────────────────────────────────────────────────

    /// Store `value` under `key` for `ttl`, or until removed when `ttl` is `None`.
    pub fn cache_set(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl: Option<Duration>,
    ) {
        let entry = CacheEntry {
            value: value.into(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.write_cache().insert(key.into(), entry);
    }

    /// Fetch a live entry. Expired entries read as absent.
    pub fn cache_get(&self, key: &str) -> Option<String> {
        let cache = self
            .cache
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        cache
            .get(key)
            .filter(|entry| entry.is_live(Instant::now()))
            .map(|entry| entry.value.clone())
    }

    /// Remove `key`. Returns whether a live entry was removed.
    pub fn cache_delete(&self, key: &str) -> bool {
        self.write_cache()
            .remove(key)
            .is_some_and(|entry| entry.is_live(Instant::now()))
    }

    /// Live keys starting with `prefix`, sorted.
    pub fn cache_keys(&self, prefix: &str) -> Vec<String> {
        let now = Instant::now();
        let cache = self
            .cache
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut keys: Vec<String> = cache
            .iter()
            .filter(|(key, entry)| key.starts_with(prefix) && entry.is_live(now))
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    fn write_cache(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.cache
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
