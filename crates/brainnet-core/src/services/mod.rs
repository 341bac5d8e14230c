//! Service facades, the process-wide registry and the resolvers that connect
//! them.

mod facade;
mod models;
mod registry;
mod resolver;
mod storage;

pub use facade::{
    AgentService, ChatService, DatabaseBacked, DocumentService, RagService, ServiceKind,
};
pub use models::{ModelHealth, ModelService, ModelStats};
pub use registry::{DB_MANAGER_KEY, HEALTH_SERVICE_KEY, ServiceRegistry};
pub use resolver::{
    get_agent_service, get_chat_service, get_database_manager, get_document_service,
    get_health_service, get_minio_service, get_model_service, get_rag_service, resolve,
};
pub use storage::MinioService;
