//! Model catalog types.
//!
//! These are the interchange shapes for model metadata and load operations.
//! Field names serialize verbatim (snake_case) since clients of the LLM
//! service already depend on them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use validator::{Validate, ValidationError};

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// What a model is used for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelType {
    Chat,
    Embedding,
    Completion,
    Classification,
}

/// Who serves the model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelProvider {
    OpenAi,
    Anthropic,
    HuggingFace,
    Local,
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog entries
// ─────────────────────────────────────────────────────────────────────────────

/// Information about a model in the catalog.
///
/// `name` is the catalog key and must be unique within one catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ModelInfo {
    /// Model name, e.g. `gpt-4`.
    #[validate(length(min = 1, message = "model name cannot be empty"))]
    pub name: String,
    pub provider: ModelProvider,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    pub description: String,
    /// Maximum tokens supported. Always positive.
    #[validate(range(min = 1, message = "max_tokens must be a positive integer"))]
    pub max_tokens: u64,
    /// Whether the model is currently loaded.
    #[serde(default)]
    pub is_loaded: bool,
    /// Free-form model parameters.
    #[serde(default)]
    pub parameters: Option<HashMap<String, Value>>,
    /// Pricing rates keyed by unit (e.g. `input_per_1k`).
    #[serde(default)]
    pub pricing: Option<HashMap<String, f64>>,
}

impl ModelInfo {
    /// Create a catalog entry with optional fields unset.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        provider: ModelProvider,
        model_type: ModelType,
        description: impl Into<String>,
        max_tokens: u64,
    ) -> Self {
        Self {
            name: name.into(),
            provider,
            model_type,
            description: description.into(),
            max_tokens,
            is_loaded: false,
            parameters: None,
            pricing: None,
        }
    }

    /// Return a copy with the loaded flag set.
    #[must_use]
    pub fn with_loaded(mut self, is_loaded: bool) -> Self {
        self.is_loaded = is_loaded;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Load operations
// ─────────────────────────────────────────────────────────────────────────────

/// Request to load a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ModelLoadRequest {
    #[validate(length(min = 1, message = "model_name cannot be empty"))]
    pub model_name: String,
    #[serde(default)]
    pub config: Option<HashMap<String, Value>>,
    /// Reload even if the model is already loaded. `null` reads as `false`.
    #[serde(default, deserialize_with = "null_as_false")]
    pub force_reload: bool,
}

impl ModelLoadRequest {
    #[must_use]
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            config: None,
            force_reload: false,
        }
    }
}

/// Outcome of a load request.
///
/// A failed response always carries a message saying why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "failure_has_message"))]
pub struct ModelLoadResponse {
    pub model_name: String,
    pub success: bool,
    pub message: String,
    /// Seconds spent loading.
    #[validate(range(min = 0.0, message = "load_time cannot be negative"))]
    pub load_time: f64,
    /// Human-readable memory footprint, e.g. `1.2 GB`.
    #[serde(default)]
    pub memory_usage: Option<String>,
}

impl ModelLoadResponse {
    /// A successful load.
    #[must_use]
    pub fn loaded(model_name: impl Into<String>, message: impl Into<String>, load_time: f64) -> Self {
        Self {
            model_name: model_name.into(),
            success: true,
            message: message.into(),
            load_time: load_time.max(0.0),
            memory_usage: None,
        }
    }

    /// A failed load. `reason` must be non-empty.
    #[must_use]
    pub fn failed(model_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            success: false,
            message: reason.into(),
            load_time: 0.0,
            memory_usage: None,
        }
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn failure_has_message(response: &ModelLoadResponse) -> Result<(), ValidationError> {
    if !response.success && response.message.trim().is_empty() {
        return Err(ValidationError::new("message")
            .with_message("a failed load must explain the failure".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_enum_literals_roundtrip_through_strum() {
        for model_type in ModelType::iter() {
            assert_eq!(ModelType::from_str(model_type.as_ref()).unwrap(), model_type);
        }
        for provider in ModelProvider::iter() {
            assert_eq!(ModelProvider::from_str(provider.as_ref()).unwrap(), provider);
        }
    }

    #[test]
    fn test_provider_literals() {
        let names: Vec<String> = ModelProvider::iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["openai", "anthropic", "huggingface", "local"]);
    }

    #[test]
    fn test_model_info_serializes_type_field() {
        let info = ModelInfo::new("gpt-4", ModelProvider::OpenAi, ModelType::Chat, "GPT-4", 8192);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["type"], "chat");
        assert_eq!(json["provider"], "openai");
        assert_eq!(json["is_loaded"], false);
        assert!(json["parameters"].is_null());
        assert!(json.get("model_type").is_none());
    }

    #[test]
    fn test_zero_max_tokens_fails_validation() {
        let info = ModelInfo::new("m", ModelProvider::Local, ModelType::Completion, "", 0);
        assert!(info.validate().is_err());
    }

    #[test]
    fn test_failed_response_requires_message() {
        let response = ModelLoadResponse::failed("m", "");
        assert!(response.validate().is_err());

        let response = ModelLoadResponse::failed("m", "model not in catalog");
        assert!(response.validate().is_ok());
    }

    #[test]
    fn test_force_reload_accepts_null() {
        let request: ModelLoadRequest =
            serde_json::from_str(r#"{"model_name": "gpt-4", "force_reload": null}"#).unwrap();
        assert!(!request.force_reload);

        let request: ModelLoadRequest = serde_json::from_str(r#"{"model_name": "gpt-4"}"#).unwrap();
        assert!(!request.force_reload);

        let request: ModelLoadRequest =
            serde_json::from_str(r#"{"model_name": "gpt-4", "force_reload": true}"#).unwrap();
        assert!(request.force_reload);
    }

    #[test]
    fn test_loaded_clamps_negative_time() {
        let response = ModelLoadResponse::loaded("m", "ok", -0.5);
        assert!(response.load_time.abs() < f64::EPSILON);
        assert!(response.validate().is_ok());
    }
}
