//! Internal representation consumed by the renderer.
//!
//! Built by [`crate::transform::adapt_message`]; nothing here knows about the
//! wire format, so upstream schema changes stop at the adapter.

use crate::error::BlockFormatWarning;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub id: Option<String>,
    pub model: Option<String>,
    pub role: Option<String>,
    pub stop_reason: Option<String>,
    pub stop_sequence: Option<String>,
    pub usage: Option<Usage>,
    pub blocks: Vec<Block>,
}

impl Message {
    /// Warnings for every top-level block that degraded to a fallback card
    pub fn warnings(&self) -> Vec<BlockFormatWarning> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(index, block)| match block {
                Block::Malformed {
                    block_type, reason, ..
                } => Some(BlockFormatWarning {
                    index,
                    block_type: block_type.clone(),
                    reason: reason.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text {
        text: String,
        citations: Vec<Citation>,
    },
    ToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ServerToolUse {
        id: String,
        name: String,
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        content: ToolResultContent,
        is_error: bool,
    },
    WebSearchResult {
        tool_use_id: Option<String>,
        content: WebSearchContent,
    },
    Thinking {
        thinking: String,
        signature: Option<String>,
    },
    Image {
        source: MediaSource,
    },
    Document {
        source: MediaSource,
        title: Option<String>,
    },
    /// Type tag the renderer does not recognize
    Unknown {
        block_type: String,
        raw: Value,
    },
    /// Recognized (or missing) tag whose fields could not be read
    Malformed {
        block_type: String,
        reason: String,
        raw: Value,
    },
}

impl Block {
    /// Type tag as it appears on the wire
    pub fn type_tag(&self) -> &str {
        match self {
            Block::Text { .. } => "text",
            Block::ToolUse { .. } => "tool_use",
            Block::ServerToolUse { .. } => "server_tool_use",
            Block::ToolResult { .. } => "tool_result",
            Block::WebSearchResult { .. } => "web_search_tool_result",
            Block::Thinking { .. } => "thinking",
            Block::Image { .. } => "image",
            Block::Document { .. } => "document",
            Block::Unknown { block_type, .. } | Block::Malformed { block_type, .. } => {
                block_type.as_str()
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Block::Unknown { .. } | Block::Malformed { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    /// Location kind, e.g. "web_search_result_location" or "char_location"
    pub kind: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub cited_text: String,
    pub document_index: Option<u64>,
}

impl Citation {
    /// Key used to number citations: the URL, or the cited document's index
    pub fn source_key(&self) -> Option<String> {
        match (&self.url, self.document_index) {
            (Some(url), _) if !url.is_empty() => Some(url.clone()),
            (_, Some(index)) => Some(format!("document:{}", index)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolResultContent {
    Empty,
    Text(String),
    Blocks(Vec<Block>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WebSearchContent {
    Results(Vec<SearchResultEntry>),
    Error { error_code: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultEntry {
    pub title: String,
    pub url: String,
    pub page_age: Option<String>,
    pub encrypted_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    Base64 { media_type: String, data: String },
    Url { url: String },
    /// Plain-text document source
    Text { media_type: String, data: String },
    /// Source kinds without inline data (e.g. "file")
    Other { source_type: String },
}

impl MediaSource {
    pub fn source_type(&self) -> &str {
        match self {
            MediaSource::Base64 { .. } => "base64",
            MediaSource::Url { .. } => "url",
            MediaSource::Text { .. } => "text",
            MediaSource::Other { source_type } => source_type.as_str(),
        }
    }
}
