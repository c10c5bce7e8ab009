//! Wire shapes of the Claude Messages API response, as far as rendering needs them.
//!
//! These mirror the JSON the API returns and are only used by the adapter in
//! [`crate::transform`]. Blocks stay as raw `serde_json::Value` until the adapter
//! decides whether each one is known, unknown or malformed.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Claude Messages API response envelope
///
/// Metadata fields are informational only: a value of the wrong type is logged
/// and read as absent instead of rejecting the message.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,

    /// "message" for API responses
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub msg_type: Option<String>,

    /// "assistant" for API responses
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub model: Option<String>,

    /// Either a string or array of content blocks
    #[serde(default)]
    pub content: Option<ContentType>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub stop_reason: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub stop_sequence: Option<String>,

    /// Kept raw so a malformed usage object never rejects the whole message
    #[serde(default)]
    pub usage: Option<Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            tracing::warn!("Ignoring non-string envelope field: {}", other);
            None
        }
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentType {
    Text(String),
    Blocks(Vec<serde_json::Value>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageInfo {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(default)]
    pub cache_read_input_tokens: Option<u64>,
}

/// Content blocks the renderer knows how to display
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum WireBlock {
    #[serde(rename = "text")]
    Text {
        text: String,
        #[serde(default)]
        citations: Option<Vec<WireCitation>>,
    },

    #[serde(rename = "tool_use")]
    ToolUse {
        id: String,
        name: String,
        #[serde(default)]
        input: serde_json::Value,
    },

    #[serde(rename = "server_tool_use")]
    ServerToolUse {
        id: String,
        name: String,
        #[serde(default)]
        input: serde_json::Value,
    },

    #[serde(rename = "tool_result")]
    ToolResult {
        tool_use_id: String,
        #[serde(default)]
        content: Option<serde_json::Value>,
        #[serde(default)]
        is_error: Option<bool>,
    },

    #[serde(rename = "web_search_tool_result")]
    WebSearchToolResult {
        #[serde(default)]
        tool_use_id: Option<String>,
        content: serde_json::Value,
    },

    #[serde(rename = "thinking")]
    Thinking {
        thinking: String,
        #[serde(default)]
        signature: Option<String>,
    },

    #[serde(rename = "image")]
    Image { source: WireSource },

    #[serde(rename = "document")]
    Document {
        source: WireSource,
        #[serde(default)]
        title: Option<String>,
    },
}

impl WireBlock {
    /// Type tags accepted by [`WireBlock`]
    pub const KNOWN_TYPES: &'static [&'static str] = &[
        "text",
        "tool_use",
        "server_tool_use",
        "tool_result",
        "web_search_tool_result",
        "thinking",
        "image",
        "document",
    ];

    pub fn is_known(block_type: &str) -> bool {
        Self::KNOWN_TYPES.contains(&block_type)
    }
}

/// Citation annotation attached to a text block
#[derive(Debug, Clone, Deserialize)]
pub struct WireCitation {
    /// e.g. "web_search_result_location", "char_location", "page_location"
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cited_text: String,
    #[serde(default)]
    pub document_index: Option<u64>,
    #[serde(default)]
    pub document_title: Option<String>,
}

/// Source of an image or document block
#[derive(Debug, Clone, Deserialize)]
pub struct WireSource {
    /// "base64", "url", "text", "file", ...
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One entry of a `web_search_tool_result` content list
#[derive(Debug, Clone, Deserialize)]
pub struct WireSearchResult {
    #[serde(rename = "type", default)]
    pub result_type: Option<String>,
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub page_age: Option<String>,
    #[serde(default)]
    pub encrypted_content: Option<String>,
}

/// Error payload returned instead of a result list when a web search fails
#[derive(Debug, Clone, Deserialize)]
pub struct WireSearchError {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub error_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_response_envelope() {
        let json = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-5",
            "content": [{"type": "text", "text": "Hello"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        }"#;

        let resp: ClaudeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.id.as_deref(), Some("msg_01"));
        assert_eq!(resp.stop_reason.as_deref(), Some("end_turn"));
        match resp.content {
            Some(ContentType::Blocks(blocks)) => assert_eq!(blocks.len(), 1),
            _ => panic!("Expected ContentType::Blocks"),
        }
    }

    #[test]
    fn test_parse_ill_typed_metadata() {
        let resp: ClaudeResponse = serde_json::from_value(json!({
            "id": 42,
            "type": "message",
            "model": {"name": "claude"},
            "role": null,
            "stop_reason": "end_turn",
            "content": [{"type": "text", "text": "Hello"}]
        }))
        .unwrap();

        assert_eq!(resp.id, None);
        assert_eq!(resp.model, None);
        assert_eq!(resp.role, None);
        assert_eq!(resp.msg_type.as_deref(), Some("message"));
        assert_eq!(resp.stop_reason.as_deref(), Some("end_turn"));
    }

    #[test]
    fn test_parse_string_content() {
        let resp: ClaudeResponse =
            serde_json::from_value(json!({"role": "user", "content": "Hi"})).unwrap();
        assert!(matches!(resp.content, Some(ContentType::Text(_))));
    }

    #[test]
    fn test_parse_tool_use_block() {
        let block: WireBlock = serde_json::from_value(json!({
            "type": "tool_use",
            "id": "toolu_1",
            "name": "get_weather",
            "input": {"location": "SF"}
        }))
        .unwrap();

        match block {
            WireBlock::ToolUse { id, name, input } => {
                assert_eq!(id, "toolu_1");
                assert_eq!(name, "get_weather");
                assert_eq!(input["location"], "SF");
            }
            _ => panic!("Expected ToolUse block"),
        }
    }

    #[test]
    fn test_missing_field_is_error() {
        let result = serde_json::from_value::<WireBlock>(json!({
            "type": "tool_use",
            "id": "toolu_1"
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("name"));
    }

    #[test]
    fn test_known_types() {
        assert!(WireBlock::is_known("thinking"));
        assert!(!WireBlock::is_known("redacted_thinking"));
    }
}
