//! Process-wide service registry.
//!
//! The composition root fills the registry once at startup. Afterwards it is
//! shared read-only behind an `Arc` and only handed out `Arc` clones.

use std::sync::Arc;

use crate::error::CoreError;
use crate::infra::{DatabaseManager, HealthService};

/// Key under which the database manager is registered.
pub const DB_MANAGER_KEY: &str = "db_manager";

/// Key under which the health service is registered.
pub const HEALTH_SERVICE_KEY: &str = "health_service";

/// Long-lived singletons shared by every request.
#[derive(Debug, Default, Clone)]
pub struct ServiceRegistry {
    db_manager: Option<Arc<DatabaseManager>>,
    health_service: Option<Arc<HealthService>>,
}

impl ServiceRegistry {
    /// An empty registry. Every lookup fails until slots are filled.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_database(mut self, db: Arc<DatabaseManager>) -> Self {
        self.db_manager = Some(db);
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: Arc<HealthService>) -> Self {
        self.health_service = Some(health);
        self
    }

    /// The shared database manager.
    pub fn database_manager(&self) -> Result<Arc<DatabaseManager>, CoreError> {
        self.db_manager
            .clone()
            .ok_or(CoreError::MissingState(DB_MANAGER_KEY))
    }

    /// The shared health service.
    pub fn health_service(&self) -> Result<Arc<HealthService>, CoreError> {
        self.health_service
            .clone()
            .ok_or(CoreError::MissingState(HEALTH_SERVICE_KEY))
    }

    /// Fail with the first unfilled slot.
    pub fn verify(&self) -> Result<(), CoreError> {
        self.database_manager()?;
        self.health_service()?;
        Ok(())
    }
}
