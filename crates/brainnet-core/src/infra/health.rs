//! Process-wide health service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::database::DatabaseManager;

/// Basic liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Health service shared by all requests.
#[derive(Debug)]
pub struct HealthService {
    db: Arc<DatabaseManager>,
}

impl HealthService {
    pub const fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// The database manager this service reports on.
    pub const fn database(&self) -> &Arc<DatabaseManager> {
        &self.db
    }

    /// `healthy` while the database manager is initialized, `starting`
    /// before and after.
    pub fn liveness(&self) -> HealthStatus {
        let status = if self.db.is_initialized() {
            "healthy"
        } else {
            "starting"
        };
        HealthStatus {
            status: status.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DatabaseSettings;

    #[test]
    fn test_liveness_follows_database_lifecycle() {
        let db = Arc::new(DatabaseManager::new(DatabaseSettings::default()));
        let health = HealthService::new(Arc::clone(&db));

        assert_eq!(health.liveness().status, "starting");
        db.initialize();
        assert_eq!(health.liveness().status, "healthy");
        assert!(Arc::ptr_eq(health.database(), &db));
    }
}
