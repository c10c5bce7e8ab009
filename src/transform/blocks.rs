use crate::models::claude::{WireBlock, WireCitation, WireSearchError, WireSearchResult, WireSource};
use crate::models::{
    Block, Citation, MediaSource, SearchResultEntry, ToolResultContent, WebSearchContent,
};
use serde_json::Value;

/// Convert one raw content block into the internal representation
///
/// Never fails: blocks with an unrecognized tag become [`Block::Unknown`] and
/// blocks that cannot be read become [`Block::Malformed`] with the reason.
pub fn adapt_block(raw: &Value) -> Block {
    let Some(block_type) = raw.get("type").and_then(Value::as_str) else {
        return Block::Malformed {
            block_type: "unknown".to_string(),
            reason: "block has no string `type` tag".to_string(),
            raw: raw.clone(),
        };
    };

    if !WireBlock::is_known(block_type) {
        tracing::debug!(block_type, "Unrecognized block type, using fallback card");
        return Block::Unknown {
            block_type: block_type.to_string(),
            raw: raw.clone(),
        };
    }

    let adapted = serde_json::from_value::<WireBlock>(raw.clone())
        .map_err(|e| e.to_string())
        .and_then(from_wire);

    match adapted {
        Ok(block) => block,
        Err(reason) => {
            tracing::warn!(block_type, %reason, "Malformed content block");
            Block::Malformed {
                block_type: block_type.to_string(),
                reason,
                raw: raw.clone(),
            }
        }
    }
}

fn from_wire(block: WireBlock) -> Result<Block, String> {
    let block = match block {
        WireBlock::Text { text, citations } => Block::Text {
            text,
            citations: citations
                .unwrap_or_default()
                .into_iter()
                .map(adapt_citation)
                .collect(),
        },
        WireBlock::ToolUse { id, name, input } => Block::ToolUse { id, name, input },
        WireBlock::ServerToolUse { id, name, input } => Block::ServerToolUse { id, name, input },
        WireBlock::ToolResult {
            tool_use_id,
            content,
            is_error,
        } => Block::ToolResult {
            tool_use_id,
            content: adapt_tool_result_content(content)?,
            is_error: is_error.unwrap_or(false),
        },
        WireBlock::WebSearchToolResult {
            tool_use_id,
            content,
        } => Block::WebSearchResult {
            tool_use_id,
            content: adapt_search_content(content)?,
        },
        WireBlock::Thinking {
            thinking,
            signature,
        } => Block::Thinking {
            thinking,
            signature,
        },
        WireBlock::Image { source } => Block::Image {
            source: adapt_source(source)?,
        },
        WireBlock::Document { source, title } => Block::Document {
            source: adapt_source(source)?,
            title,
        },
    };
    Ok(block)
}

fn adapt_citation(citation: WireCitation) -> Citation {
    Citation {
        kind: citation.kind.unwrap_or_else(|| "citation".to_string()),
        url: citation.url,
        title: citation.title.or(citation.document_title),
        cited_text: citation.cited_text,
        document_index: citation.document_index,
    }
}

fn adapt_tool_result_content(content: Option<Value>) -> Result<ToolResultContent, String> {
    match content {
        None | Some(Value::Null) => Ok(ToolResultContent::Empty),
        Some(Value::String(text)) => Ok(ToolResultContent::Text(text)),
        Some(Value::Array(items)) => Ok(ToolResultContent::Blocks(
            items.iter().map(adapt_block).collect(),
        )),
        Some(other) => Err(format!(
            "tool_result content must be a string or a list, got {}",
            super::validation::value_kind(&other)
        )),
    }
}

fn adapt_search_content(content: Value) -> Result<WebSearchContent, String> {
    match content {
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<WireSearchResult>(item)
                    .map(|r| {
                        if let Some(t) = r.result_type.as_deref()
                            && t != "web_search_result"
                        {
                            tracing::debug!(result_type = t, "Unexpected search result type");
                        }
                        SearchResultEntry {
                            title: r.title,
                            url: r.url,
                            page_age: r.page_age,
                            encrypted_content: r.encrypted_content,
                        }
                    })
                    .map_err(|e| format!("invalid search result: {}", e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(WebSearchContent::Results),
        Value::Object(_) => {
            let err: WireSearchError = serde_json::from_value(content)
                .map_err(|e| format!("invalid search error payload: {}", e))?;
            Ok(WebSearchContent::Error {
                error_code: err.error_code.unwrap_or(err.error_type),
            })
        }
        other => Err(format!(
            "web_search_tool_result content must be a list, got {}",
            super::validation::value_kind(&other)
        )),
    }
}

fn adapt_source(source: WireSource) -> Result<MediaSource, String> {
    match source.source_type.as_str() {
        "base64" => Ok(MediaSource::Base64 {
            media_type: source
                .media_type
                .ok_or("base64 source is missing `media_type`")?,
            data: source.data.ok_or("base64 source is missing `data`")?,
        }),
        "url" => Ok(MediaSource::Url {
            url: source.url.ok_or("url source is missing `url`")?,
        }),
        "text" => Ok(MediaSource::Text {
            media_type: source.media_type.unwrap_or_else(|| "text/plain".to_string()),
            data: source.data.ok_or("text source is missing `data`")?,
        }),
        _ => Ok(MediaSource::Other {
            source_type: source.source_type,
        }),
    }
}
