//! Object-storage facade.

use uuid::Uuid;

use crate::settings::StorageSettings;

/// Object-storage (`MinIO`) facade.
///
/// Unlike the database-backed facades this one shares nothing with other
/// requests: each instance reads its own connection settings.
#[derive(Debug)]
pub struct MinioService {
    settings: StorageSettings,
    id: Uuid,
}

impl MinioService {
    /// Build a facade from the `MINIO_*` environment variables.
    pub fn new() -> Self {
        Self::with_settings(StorageSettings::from_env())
    }

    pub fn with_settings(settings: StorageSettings) -> Self {
        Self {
            settings,
            id: Uuid::new_v4(),
        }
    }

    pub const fn settings(&self) -> &StorageSettings {
        &self.settings
    }

    pub fn bucket(&self) -> &str {
        &self.settings.bucket
    }

    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    pub const fn instance_id(&self) -> Uuid {
        self.id
    }
}

impl Default for MinioService {
    fn default() -> Self {
        Self::new()
    }
}
