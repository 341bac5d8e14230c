//! Service resolution.
//!
//! Leaf resolvers read singletons from the registry. Dependent resolvers take
//! a leaf resolver's output and build a fresh facade around it. Nothing is
//! cached: two calls always yield two facades.

use std::sync::Arc;

use super::facade::{AgentService, ChatService, DatabaseBacked, DocumentService, RagService};
use super::models::ModelService;
use super::registry::ServiceRegistry;
use super::storage::MinioService;
use crate::error::CoreError;
use crate::infra::{DatabaseManager, HealthService};

pub fn get_database_manager(registry: &ServiceRegistry) -> Result<Arc<DatabaseManager>, CoreError> {
    registry.database_manager()
}

pub fn get_health_service(registry: &ServiceRegistry) -> Result<Arc<HealthService>, CoreError> {
    registry.health_service()
}

/// Resolve any database-backed facade straight from the registry.
pub fn resolve<S: DatabaseBacked>(registry: &ServiceRegistry) -> Result<S, CoreError> {
    let facade = S::from_database(get_database_manager(registry)?);
    tracing::debug!(
        service = %S::KIND,
        instance_id = %facade.instance_id(),
        "Resolved service"
    );
    Ok(facade)
}

pub fn get_chat_service(db: Arc<DatabaseManager>) -> ChatService {
    ChatService::from_database(db)
}

pub fn get_rag_service(db: Arc<DatabaseManager>) -> RagService {
    RagService::from_database(db)
}

pub fn get_agent_service(db: Arc<DatabaseManager>) -> AgentService {
    AgentService::from_database(db)
}

pub fn get_document_service(db: Arc<DatabaseManager>) -> DocumentService {
    DocumentService::from_database(db)
}

pub fn get_model_service(db: Arc<DatabaseManager>) -> ModelService {
    ModelService::from_database(db)
}

/// The storage facade has no upstream dependency.
pub fn get_minio_service() -> MinioService {
    MinioService::new()
}
