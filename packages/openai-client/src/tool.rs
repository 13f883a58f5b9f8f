//! Tool (function calling) types and freeform JSON recovery.
//!
//! The model is asked to answer through a single forced tool call whose
//! arguments conform to a schema. When a model ignores the tool and answers
//! in prose anyway, `extract_json` recovers the first JSON object embedded in
//! the text as a best-effort fallback.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::schema::StructuredOutput;

/// OpenAI tool definition.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// The name of the tool.
    pub name: String,

    /// A description of what the tool does.
    pub description: String,

    /// JSON schema for the tool's parameters.
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Build a definition whose parameter schema is generated from `Args`.
    pub fn for_args<Args: StructuredOutput>(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Args::openai_schema(),
        }
    }

    /// Build a definition from an already-constructed parameter schema.
    pub fn from_schema(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Convert to OpenAI API wire format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters
            }
        })
    }
}

/// A tool call from the model.
#[derive(Debug, Clone)]
pub struct ToolCall {
    /// The ID of this tool call (for matching responses).
    pub id: String,

    /// The name of the tool being called.
    pub name: String,

    /// The arguments as a JSON string.
    pub arguments: String,
}

impl ToolCall {
    /// Parse a tool call from OpenAI's response format.
    pub fn from_openai_value(value: &serde_json::Value) -> Option<Self> {
        Some(Self {
            id: value.get("id")?.as_str()?.to_string(),
            name: value.get("function")?.get("name")?.as_str()?.to_string(),
            arguments: value
                .get("function")?
                .get("arguments")?
                .as_str()?
                .to_string(),
        })
    }

    /// Parse arguments into a typed struct.
    pub fn parse_args<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.arguments)
    }
}

/// Best-effort extraction of the first JSON object embedded in freeform text.
///
/// Scans for a top-level `{ ... }` span with balanced braces (string-aware)
/// and returns it if it parses. Returns `None` when the text carries no
/// usable JSON object.
pub fn extract_json(text: &str) -> Option<serde_json::Value> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let candidate = &text[start..start + offset + ch.len_utf8()];
                    return serde_json::from_str(candidate).ok();
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct Args {
        label: String,
    }

    #[test]
    fn test_definition_wire_format() {
        let def = ToolDefinition::for_args::<Args>("record_label", "Record a label");
        let wire = def.to_openai_format();

        assert_eq!(wire["type"], "function");
        assert_eq!(wire["function"]["name"], "record_label");
        assert_eq!(
            wire["function"]["parameters"]["properties"]["label"]["type"],
            "string"
        );
    }

    #[test]
    fn test_tool_call_parse_args() {
        let value = serde_json::json!({
            "id": "call_abc",
            "function": {"name": "record_label", "arguments": "{\"label\":\"ok\"}"}
        });
        let call = ToolCall::from_openai_value(&value).unwrap();
        let args: Args = call.parse_args().unwrap();
        assert_eq!(args.label, "ok");
    }

    #[test]
    fn test_extract_json_from_prose() {
        let text = "Sure! Here is the analysis:\n```json\n{\"score\": 72, \"note\": \"a {nested} brace in a string\"}\n``` hope that helps";
        let value = extract_json(text).unwrap();
        assert_eq!(value["score"], 72);
    }

    #[test]
    fn test_extract_json_nested_objects() {
        let text = "prefix {\"outer\": {\"inner\": 1}} suffix";
        let value = extract_json(text).unwrap();
        assert_eq!(value["outer"]["inner"], 1);
    }

    #[test]
    fn test_extract_json_none_for_plain_text() {
        assert!(extract_json("no json here").is_none());
        assert!(extract_json("unbalanced { oops").is_none());
    }
}
