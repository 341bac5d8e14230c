//! The capability shared by every database-backed facade.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};
use uuid::Uuid;

use crate::infra::DatabaseManager;

/// The closed set of facades built from the shared database manager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ServiceKind {
    Chat,
    Rag,
    Agents,
    Documents,
    Models,
}

/// A per-request facade constructible from the shared database manager.
///
/// Implementors hold nothing that must outlive the request.
pub trait DatabaseBacked: Send + Sized {
    const KIND: ServiceKind;

    /// Stable facade name reported on the wire.
    const NAME: &'static str;

    /// Build a fresh facade around `db`.
    fn from_database(db: Arc<DatabaseManager>) -> Self;

    /// The injected database manager.
    fn database(&self) -> &Arc<DatabaseManager>;

    /// Identity of this facade instance.
    fn instance_id(&self) -> Uuid;
}

/// Implements `DatabaseBacked` for a struct with `db` and `id` fields.
macro_rules! database_backed {
    ($facade:ty, $kind:expr) => {
        impl $crate::services::DatabaseBacked for $facade {
            const KIND: $crate::services::ServiceKind = $kind;
            const NAME: &'static str = stringify!($facade);

            fn from_database(db: ::std::sync::Arc<$crate::infra::DatabaseManager>) -> Self {
                Self {
                    db,
                    id: ::uuid::Uuid::new_v4(),
                }
            }

            fn database(&self) -> &::std::sync::Arc<$crate::infra::DatabaseManager> {
                &self.db
            }

            fn instance_id(&self) -> ::uuid::Uuid {
                self.id
            }
        }
    };
}

pub(crate) use database_backed;

// ─────────────────────────────────────────────────────────────────────────────
// Facades
// ─────────────────────────────────────────────────────────────────────────────

/// Chat completions and conversations.
#[derive(Debug)]
pub struct ChatService {
    db: Arc<DatabaseManager>,
    id: Uuid,
}

/// Retrieval-augmented generation.
#[derive(Debug)]
pub struct RagService {
    db: Arc<DatabaseManager>,
    id: Uuid,
}

/// Agent execution.
#[derive(Debug)]
pub struct AgentService {
    db: Arc<DatabaseManager>,
    id: Uuid,
}

/// Document ingestion and lookup.
#[derive(Debug)]
pub struct DocumentService {
    db: Arc<DatabaseManager>,
    id: Uuid,
}

database_backed!(ChatService, ServiceKind::Chat);
database_backed!(RagService, ServiceKind::Rag);
database_backed!(AgentService, ServiceKind::Agents);
database_backed!(DocumentService, ServiceKind::Documents);
