//! Status and identity payloads.

use std::collections::BTreeMap;

use brainnet_core::{Backend, DatabaseManager, HealthStatus, ServiceKind, Settings};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const API_VERSION: &str = "1.0.0";

/// Identity probe of the generic API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatusDto {
    pub message: String,
    pub version: String,
    pub status: String,
}

impl ApiStatusDto {
    pub fn operational() -> Self {
        Self {
            message: "Brain_Net API v1".to_string(),
            version: API_VERSION.to_string(),
            status: "operational".to_string(),
        }
    }
}

/// Root payload of the LLM service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeDto {
    pub message: String,
    pub version: String,
    pub status: String,
    pub docs: String,
    pub capabilities: Vec<String>,
}

impl Default for WelcomeDto {
    fn default() -> Self {
        Self {
            message: "Welcome to Brain_Net LLM Service".to_string(),
            version: API_VERSION.to_string(),
            status: "operational".to_string(),
            docs: "/docs".to_string(),
            capabilities: [
                "RAG (Retrieval Augmented Generation)",
                "Chat Completion",
                "Document Processing",
                "Embedding Generation",
                "Agent-based Tasks",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

/// Reported by each mounted surface's index route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceStatusDto {
    pub surface: ServiceKind,
    pub service: String,
    pub instance_id: Uuid,
    pub status: String,
}

impl SurfaceStatusDto {
    pub fn mounted(surface: ServiceKind, service: &str, instance_id: Uuid) -> Self {
        Self {
            surface,
            service: service.to_string(),
            instance_id,
            status: "mounted".to_string(),
        }
    }
}

/// Where the documents surface stores uploads. Credentials are never echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageInfoDto {
    pub endpoint: String,
    pub bucket: String,
    pub instance_id: Uuid,
}

/// Readiness of one LLM dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessDto {
    pub healthy: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmStatusDto {
    pub models_loaded: usize,
    pub default_model: String,
    pub vector_store_ready: ReadinessDto,
    pub embedding_service_ready: ReadinessDto,
}

impl LlmStatusDto {
    /// The vector store is ready when Elasticsearch has settings.
    pub fn new(models_loaded: usize, settings: &Settings, db: &DatabaseManager) -> Self {
        let vector_store_ready = if db.configured_backends().contains(&Backend::Elasticsearch) {
            ReadinessDto {
                healthy: true,
                message: "Vector store configured (elasticsearch)".to_string(),
                model: None,
            }
        } else {
            ReadinessDto {
                healthy: false,
                message: "Vector store not configured".to_string(),
                model: None,
            }
        };

        Self {
            models_loaded,
            default_model: settings.default_llm_model.clone(),
            vector_store_ready,
            embedding_service_ready: ReadinessDto {
                healthy: true,
                message: "Embedding service ready".to_string(),
                model: Some(settings.default_embedding_model.clone()),
            },
        }
    }
}

/// Liveness plus which backing stores have settings.
///
/// Stores are reported as `configured` or `not_configured`; nothing is
/// contacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedHealthDto {
    #[serde(flatten)]
    pub liveness: HealthStatus,
    pub services: BTreeMap<String, String>,
    pub llm_status: LlmStatusDto,
}

impl DetailedHealthDto {
    pub fn new(liveness: HealthStatus, db: &DatabaseManager, llm_status: LlmStatusDto) -> Self {
        let configured = db.configured_backends();
        let services = Backend::all()
            .map(|backend| {
                let state = if configured.contains(&backend) {
                    "configured"
                } else {
                    "not_configured"
                };
                (backend.to_string(), state.to_string())
            })
            .collect();
        Self {
            liveness,
            services,
            llm_status,
        }
    }
}
