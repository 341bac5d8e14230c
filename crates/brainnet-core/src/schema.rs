//! Structural validation for inbound payloads.
//!
//! `parse_json` is the single entry point: it deserializes with path tracking
//! so every failure names the offending field, then runs the type's
//! `validator` rules.

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;
use validator::ValidationErrors;

pub use validator::Validate;

/// A payload that failed structural or constraint checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("invalid enumeration value `{value}` for field `{field}`")]
    InvalidEnum { field: String, value: String },

    #[error("field `{field}` has the wrong type: {detail}")]
    InvalidType { field: String, detail: String },

    #[error("field `{field}` is invalid: {detail}")]
    Constraint { field: String, detail: String },

    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl SchemaError {
    /// The field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::InvalidEnum { field, .. }
            | Self::InvalidType { field, .. }
            | Self::Constraint { field, .. } => Some(field),
            Self::Malformed(_) => None,
        }
    }
}

/// Deserialize `bytes` as JSON into `T` and validate it.
pub fn parse_json<T>(bytes: &[u8]) -> Result<T, SchemaError>
where
    T: DeserializeOwned + Validate,
{
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value: T = serde_path_to_error::deserialize(&mut de).map_err(SchemaError::from)?;
    de.end()
        .map_err(|e| SchemaError::Malformed(strip_position(&e.to_string()).to_string()))?;
    value.validate()?;
    Ok(value)
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SchemaError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let inner = err.into_inner();
        let message = inner.to_string();
        let detail = strip_position(&message);

        if inner.classify() != Category::Data {
            return Self::Malformed(detail.to_string());
        }

        if let Some(name) = between(detail, "missing field `", "`") {
            return Self::MissingField {
                field: join_path(&path, name),
            };
        }

        if let Some(value) = between(detail, "unknown variant `", "`") {
            return Self::InvalidEnum {
                field: path,
                value: value.to_string(),
            };
        }

        Self::InvalidType {
            field: path,
            detail: detail.to_string(),
        }
    }
}

impl From<ValidationErrors> for SchemaError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((key, list)) = fields.into_iter().next() else {
            return Self::Malformed("validation failed".to_string());
        };
        let first = list.first();

        // Struct-level rules report under `__all__` and carry the field in `code`.
        let field = match first {
            Some(e) if key == "__all__" => e.code.to_string(),
            _ => key.to_string(),
        };
        let detail = first.map_or_else(
            || "validation failed".to_string(),
            |e| {
                e.message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string)
            },
        );

        Self::Constraint { field, detail }
    }
}

fn strip_position(message: &str) -> &str {
    message
        .rsplit_once(" at line ")
        .map_or(message, |(head, _)| head)
}

fn between<'a>(haystack: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    let rest = haystack.strip_prefix(prefix)?;
    rest.split_once(suffix).map(|(inner, _)| inner)
}

fn join_path(path: &str, field: &str) -> String {
    if path.is_empty() || path == "." {
        field.to_string()
    } else {
        format!("{path}.{field}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelInfo, ModelLoadRequest, ModelLoadResponse, ModelProvider, ModelType};
    use serde_json::json;
    use strum::IntoEnumIterator;

    fn model_info_json(overrides: serde_json::Value) -> Vec<u8> {
        let mut base = json!({
            "name": "gpt-4",
            "provider": "openai",
            "type": "chat",
            "description": "OpenAI GPT-4 model",
            "max_tokens": 8192
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        serde_json::to_vec(&base).unwrap()
    }

    #[test]
    fn test_every_declared_literal_is_accepted() {
        for model_type in ModelType::iter() {
            let bytes = model_info_json(json!({ "type": model_type.as_ref() }));
            let info: ModelInfo = parse_json(&bytes).unwrap();
            assert_eq!(info.model_type, model_type);
        }
        for provider in ModelProvider::iter() {
            let bytes = model_info_json(json!({ "provider": provider.as_ref() }));
            let info: ModelInfo = parse_json(&bytes).unwrap();
            assert_eq!(info.provider, provider);
        }
    }

    #[test]
    fn test_undeclared_literals_are_rejected() {
        for bad in ["Chat", "CHAT", "vision", ""] {
            let bytes = model_info_json(json!({ "type": bad }));
            let err = parse_json::<ModelInfo>(&bytes).unwrap_err();
            assert_eq!(
                err,
                SchemaError::InvalidEnum {
                    field: "type".to_string(),
                    value: bad.to_string()
                }
            );
        }

        let bytes = model_info_json(json!({ "provider": "OpenAI" }));
        let err = parse_json::<ModelInfo>(&bytes).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidEnum { ref field, .. } if field == "provider"));
    }

    #[test]
    fn test_max_tokens_must_be_positive() {
        for bad in [json!(0), json!(-1), json!(-4096)] {
            let bytes = model_info_json(json!({ "max_tokens": bad }));
            let err = parse_json::<ModelInfo>(&bytes).unwrap_err();
            assert_eq!(err.field(), Some("max_tokens"), "{err}");
        }

        for good in [1, 4096, u64::from(u32::MAX) + 1, 5_000_000_000] {
            let bytes = model_info_json(json!({ "max_tokens": good }));
            let info: ModelInfo = parse_json(&bytes).unwrap();
            assert_eq!(info.max_tokens, good);
        }
    }

    #[test]
    fn test_wrong_primitive_type_names_field() {
        let bytes = model_info_json(json!({ "max_tokens": "lots" }));
        let err = parse_json::<ModelInfo>(&bytes).unwrap_err();

        match err {
            SchemaError::InvalidType { field, detail } => {
                assert_eq!(field, "max_tokens");
                assert!(detail.contains("u64"), "{detail}");
            }
            other => panic!("expected InvalidType, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_is_named() {
        let bytes = serde_json::to_vec(&json!({
            "name": "gpt-4",
            "provider": "openai",
            "type": "chat",
            "max_tokens": 8192
        }))
        .unwrap();

        let err = parse_json::<ModelInfo>(&bytes).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                field: "description".to_string()
            }
        );
    }

    #[test]
    fn test_empty_name_is_a_constraint_error() {
        let bytes = model_info_json(json!({ "name": "" }));
        let err = parse_json::<ModelInfo>(&bytes).unwrap_err();
        assert!(matches!(err, SchemaError::Constraint { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_optional_fields_default() {
        let info: ModelInfo = parse_json(&model_info_json(json!({}))).unwrap();
        assert!(!info.is_loaded);
        assert!(info.parameters.is_none());
        assert!(info.pricing.is_none());

        let request: ModelLoadRequest = parse_json(br#"{"model_name": "gpt-4"}"#).unwrap();
        assert!(request.config.is_none());
        assert!(!request.force_reload);

        let response: ModelLoadResponse = parse_json(
            br#"{"model_name": "gpt-4", "success": true, "message": "ok", "load_time": 1.5}"#,
        )
        .unwrap();
        assert!(response.memory_usage.is_none());
    }

    #[test]
    fn test_load_request_requires_model_name() {
        let err = parse_json::<ModelLoadRequest>(br#"{"force_reload": true}"#).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                field: "model_name".to_string()
            }
        );

        let err = parse_json::<ModelLoadRequest>(br#"{"model_name": ""}"#).unwrap_err();
        assert_eq!(err.field(), Some("model_name"));
    }

    #[test]
    fn test_load_time_bounds() {
        let negative = br#"{"model_name": "m", "success": true, "message": "ok", "load_time": -0.1}"#;
        let err = parse_json::<ModelLoadResponse>(negative).unwrap_err();
        assert_eq!(err.field(), Some("load_time"));

        for ok in ["0", "0.0", "2.75"] {
            let body = format!(
                r#"{{"model_name": "m", "success": true, "message": "ok", "load_time": {ok}}}"#
            );
            assert!(parse_json::<ModelLoadResponse>(body.as_bytes()).is_ok(), "{ok}");
        }
    }

    #[test]
    fn test_failed_response_without_message_is_rejected() {
        let body = br#"{"model_name": "m", "success": false, "message": "", "load_time": 0}"#;
        let err = parse_json::<ModelLoadResponse>(body).unwrap_err();
        assert_eq!(err.field(), Some("message"));
    }

    #[test]
    fn test_syntax_error_is_malformed() {
        let err = parse_json::<ModelLoadRequest>(b"{\"model_name\": ").unwrap_err();
        assert!(matches!(err, SchemaError::Malformed(_)));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_pricing_accepts_float_rates() {
        let bytes = model_info_json(json!({ "pricing": { "input_per_1k": 0.03, "output_per_1k": 0.06 } }));
        let info: ModelInfo = parse_json(&bytes).unwrap();
        let pricing = info.pricing.unwrap();
        assert!((pricing["input_per_1k"] - 0.03).abs() < f64::EPSILON);
    }
}
