pub mod blocks;
pub mod validation;

pub use blocks::*;
pub use validation::*;

use crate::error::Result;
use crate::models::claude::{ContentType, UsageInfo};
use crate::models::{Block, Message, Usage};
use serde_json::Value;

/// Convert a Messages API response into the internal [`Message`]
///
/// Fails only when the envelope has no block list; every block is adapted
/// independently, so one bad block never affects its siblings.
pub fn adapt_message(value: &Value) -> Result<Message> {
    let resp = validate_message(value)?;
    if let Some(kind) = resp.msg_type.as_deref()
        && kind != "message"
    {
        tracing::debug!(kind, "Envelope type is not \"message\"");
    }

    let blocks = match resp.content {
        Some(ContentType::Blocks(raw)) => raw.iter().map(adapt_block).collect(),
        Some(ContentType::Text(text)) => vec![Block::Text {
            text,
            citations: Vec::new(),
        }],
        None => Vec::new(),
    };

    let usage = resp.usage.and_then(|raw| {
        serde_json::from_value::<UsageInfo>(raw)
            .map(|u| Usage {
                input_tokens: u.input_tokens,
                output_tokens: u.output_tokens,
                cache_creation_input_tokens: u.cache_creation_input_tokens,
                cache_read_input_tokens: u.cache_read_input_tokens,
            })
            .inspect_err(|e| tracing::warn!("Ignoring unreadable usage: {}", e))
            .ok()
    });

    Ok(Message {
        id: resp.id,
        model: resp.model,
        role: resp.role,
        stop_reason: resp.stop_reason,
        stop_sequence: resp.stop_sequence,
        usage,
        blocks,
    })
}
