use crate::error::{Result, VisualizerError};
use crate::models::claude::{ClaudeResponse, ContentType};
use serde_json::Value;

/// Check that the input looks like a message before any block is touched
///
/// Only the envelope is validated: the value must be an object carrying a
/// non-null `content` list (or string). Individual blocks are checked later and
/// never fail the whole message.
pub fn validate_message(value: &Value) -> Result<ClaudeResponse> {
    let Some(obj) = value.as_object() else {
        return Err(VisualizerError::Schema(format!(
            "Expected a message object, got {}",
            value_kind(value)
        )));
    };

    match obj.get("content") {
        None | Some(Value::Null) => {
            return Err(VisualizerError::Schema(
                "Message has no content block list".into(),
            ));
        }
        Some(Value::Array(_)) | Some(Value::String(_)) => {}
        Some(other) => {
            return Err(VisualizerError::Schema(format!(
                "Message content must be a list of blocks, got {}",
                value_kind(other)
            )));
        }
    }

    let resp: ClaudeResponse = serde_json::from_value(value.clone())
        .map_err(|e| VisualizerError::Schema(format!("Unrecognized message envelope: {}", e)))?;

    match resp.content {
        Some(ContentType::Blocks(_)) | Some(ContentType::Text(_)) => Ok(resp),
        None => Err(VisualizerError::Schema(
            "Message has no content block list".into(),
        )),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
