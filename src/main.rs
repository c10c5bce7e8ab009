use anyhow::Context;
use clap::Parser;
use claude_message_visualizer::{
    RenderConfig, adapt_message, display::standalone_document, render::Renderer,
};
use std::fs;
use std::io::{self, Read, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render a Claude Messages API response as HTML
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Message JSON file; reads stdin when omitted or "-"
    input: Option<String>,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Emit a complete HTML document instead of a fragment
    #[arg(long)]
    standalone: bool,

    /// Show placeholders instead of embedding base64 images
    #[arg(long)]
    no_inline_images: bool,

    /// Collapse text blocks longer than this many characters
    #[arg(long)]
    long_text_threshold: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean HTML
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::from_env()?,
    };
    if args.no_inline_images {
        config.inline_images = false;
    }
    if let Some(threshold) = args.long_text_threshold {
        config.long_text_threshold = threshold;
    }
    config.validate()?;

    let raw = match args.input.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read message from stdin")?;
            buf
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read message file {}", path))?,
    };

    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let message = adapt_message(&value)?;

    let renderer = Renderer::new(config);
    let mut html = renderer.render(&message);
    if args.standalone {
        html = standalone_document(&html, &renderer.config().title);
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write {}", path))?;
            info!(path = %path, blocks = message.blocks.len(), "Wrote visualization");
        }
        None => io::stdout().lock().write_all(html.as_bytes())?,
    }

    Ok(())
}
