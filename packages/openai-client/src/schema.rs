//! Type-safe schema generation for OpenAI structured outputs.
//!
//! Uses the `schemars` crate to automatically generate JSON schemas from Rust
//! types, then rewrites them into the shape OpenAI's strict mode accepts.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Trait for types that can be used as OpenAI structured output.
///
/// Automatically implemented for any type that implements `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate an OpenAI-compatible JSON schema for this type.
    ///
    /// OpenAI strict mode requires:
    /// 1. `additionalProperties: false` on every object schema
    /// 2. ALL properties listed in `required`, even nullable ones
    /// 3. Fully inlined schemas (no `$ref` references)
    fn openai_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        fix_object_schemas(&mut value);
        inline_refs(&mut value);

        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$defs");
            map.remove("$schema");
        }

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Fix all object schemas for OpenAI strict mode compatibility.
///
/// Adds `additionalProperties: false` and lists every property in `required`.
fn fix_object_schemas(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if map.get("type") == Some(&serde_json::Value::String("object".to_string())) {
                map.insert(
                    "additionalProperties".to_string(),
                    serde_json::Value::Bool(false),
                );

                if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                    let all_keys: Vec<serde_json::Value> = props
                        .keys()
                        .map(|k| serde_json::Value::String(k.clone()))
                        .collect();
                    map.insert("required".to_string(), serde_json::Value::Array(all_keys));
                }
            }

            for (_, v) in map.iter_mut() {
                fix_object_schemas(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                fix_object_schemas(item);
            }
        }
        _ => {}
    }
}

/// Inline all `$ref` references by substituting the definition they point at.
///
/// OpenAI's strict mode validation does not traverse `$ref`, so nested types
/// must be expanded in place. Handles both the `definitions` and `$defs`
/// section names schemars emits depending on the target draft.
fn inline_refs(value: &mut serde_json::Value) {
    let definitions = match value {
        serde_json::Value::Object(map) => map
            .get("definitions")
            .or_else(|| map.get("$defs"))
            .cloned(),
        _ => None,
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

fn inline_refs_recursive(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                let type_name = ref_path
                    .strip_prefix("#/definitions/")
                    .or_else(|| ref_path.strip_prefix("#/$defs/"));
                if let Some(type_name) = type_name {
                    if let Some(def) = definitions.get(type_name) {
                        *value = def.clone();
                        // The inlined definition may itself contain refs.
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct SubScores {
        values_alignment: i32,
        future_goals: i32,
    }

    #[derive(Deserialize, JsonSchema)]
    struct Analysis {
        overall_score: i32,
        breakdown: SubScores,
        strengths: Vec<String>,
        advice: Option<String>,
    }

    #[test]
    fn test_schema_has_no_refs_or_definitions() {
        let schema = Analysis::openai_schema();
        let text = serde_json::to_string(&schema).unwrap();

        assert!(!text.contains("$ref"), "refs must be inlined: {}", text);
        let map = schema.as_object().unwrap();
        assert!(!map.contains_key("definitions"));
        assert!(!map.contains_key("$defs"));
        assert!(!map.contains_key("$schema"));
    }

    #[test]
    fn test_nested_object_is_inlined_and_strict() {
        let schema = Analysis::openai_schema();
        let breakdown = &schema["properties"]["breakdown"];

        assert_eq!(breakdown["type"], "object");
        assert_eq!(breakdown["additionalProperties"], false);

        let required: Vec<&str> = breakdown["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(required.contains(&"values_alignment"));
        assert!(required.contains(&"future_goals"));
    }

    #[test]
    fn test_optional_fields_still_required() {
        // OpenAI strict mode wants every property in `required`,
        // including Option<T> fields (they become nullable instead).
        let schema = Analysis::openai_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        assert!(required.contains(&"overall_score"));
        assert!(required.contains(&"breakdown"));
        assert!(required.contains(&"strengths"));
        assert!(required.contains(&"advice"));
    }
}
