//! HTML rendering of a [`Message`].
//!
//! The output is a single fragment with inline styles only, suitable for
//! embedding directly into a notebook cell. Every top-level block becomes one
//! `<section class="cmv-block">` in input order; blocks that cannot be read
//! become fallback cards instead of failing the render.

pub mod blocks;
pub mod format;
pub mod shell;
pub mod style;

pub use format::{escape_html, pretty_json, render_truncated, truncate};

use crate::citation::CitationIndex;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::models::Message;
use crate::transform::adapt_message;
use serde_json::Value;
use tracing::{debug, info, warn};

/// State shared by the block renderers for one render call
pub struct RenderContext<'a> {
    pub config: &'a RenderConfig,
    pub citations: CitationIndex,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render an already adapted message
    pub fn render(&self, message: &Message) -> String {
        for warning in message.warnings() {
            warn!(%warning, "Rendering fallback card for malformed block");
        }

        let ctx = RenderContext {
            config: &self.config,
            citations: CitationIndex::build(message),
        };

        let mut html = shell::open(message, &self.config);
        if message.blocks.is_empty() {
            html.push_str(&shell::empty_notice());
        }
        for (index, block) in message.blocks.iter().enumerate() {
            debug!(index, block_type = block.type_tag(), "Rendering block");
            html.push_str(&blocks::render_block(&ctx, block, index));
        }
        html.push_str(shell::close());

        info!(
            blocks = message.blocks.len(),
            citations = ctx.citations.len(),
            bytes = html.len(),
            "Rendered message"
        );
        html
    }

    /// Adapt and render a Messages API response
    pub fn render_value(&self, value: &Value) -> Result<String> {
        let message = adapt_message(value)?;
        Ok(self.render(&message))
    }

    /// Parse, adapt and render a Messages API response given as JSON text
    pub fn render_json_str(&self, json: &str) -> Result<String> {
        let value: Value = serde_json::from_str(json)?;
        self.render_value(&value)
    }
}

/// Render with the default configuration
pub fn render_message(message: &Message) -> String {
    Renderer::default().render(message)
}

/// Adapt and render with the default configuration
pub fn render_value(value: &Value) -> Result<String> {
    Renderer::default().render_value(value)
}
