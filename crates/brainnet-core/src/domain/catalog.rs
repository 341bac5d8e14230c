//! Built-in model catalog.

use super::model::{ModelInfo, ModelProvider, ModelType};

/// Models the LLM service knows about out of the box.
pub fn builtin_catalog() -> Vec<ModelInfo> {
    vec![
        ModelInfo::new(
            "gpt-3.5-turbo",
            ModelProvider::OpenAi,
            ModelType::Chat,
            "OpenAI GPT-3.5 Turbo model",
            4096,
        ),
        ModelInfo::new(
            "gpt-4",
            ModelProvider::OpenAi,
            ModelType::Chat,
            "OpenAI GPT-4 model",
            8192,
        ),
        ModelInfo::new(
            "claude-3-sonnet",
            ModelProvider::Anthropic,
            ModelType::Chat,
            "Anthropic Claude 3 Sonnet model",
            4096,
        ),
        ModelInfo::new(
            "text-embedding-ada-002",
            ModelProvider::OpenAi,
            ModelType::Embedding,
            "OpenAI Ada v2 embedding model",
            8191,
        ),
    ]
}
