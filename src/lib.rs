//! # Claude Message Visualizer
//!
//! Renders Claude Messages API responses as self-contained HTML for notebooks.
//!
//! ## Overview
//!
//! A response is a list of typed content blocks. This crate maps each block to
//! a styled card:
//! - **Text** with numbered citation markers
//! - **Tool use / server tool use** with pretty-printed input
//! - **Tool results**, including nested blocks and error state
//! - **Web search results**, **thinking**, **images** and **documents**
//!
//! Unknown or malformed blocks render as fallback cards; only a message
//! without a block list is rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use claude_message_visualizer::render::Renderer;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let response = json!({
//!     "id": "msg_01",
//!     "role": "assistant",
//!     "model": "claude-sonnet-4-5",
//!     "content": [{"type": "text", "text": "Hello!"}]
//! });
//!
//! let html = Renderer::default().render_value(&response)?;
//! assert!(html.contains("Hello!"));
//! # Ok(())
//! # }
//! ```
//!
//! Inside an evcxr Jupyter notebook, [`display::visualize_message`] renders
//! and displays the response in one call.
//!
//! ## Modules
//!
//! - [`config`] - Rendering options from defaults, environment or TOML
//! - [`error`] - Error types and block warnings
//! - [`models`] - Wire shapes and the internal block representation
//! - [`transform`] - Adapter from API JSON to the internal representation
//! - [`citation`] - Citation numbering
//! - [`render`] - HTML rendering
//! - [`display`] - Notebook and document output

pub mod citation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod render;
pub mod transform;

pub use citation::CitationIndex;
pub use config::RenderConfig;
pub use error::{BlockFormatWarning, Result, VisualizerError};
pub use models::{Block, Message};
pub use render::{Renderer, render_message, render_value};
pub use transform::adapt_message;
