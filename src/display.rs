//! Hand-off of rendered markup to a host.
//!
//! Notebook output goes through the evcxr Jupyter kernel's rich output
//! protocol: anything printed between `EVCXR_BEGIN_CONTENT <mime>` and
//! `EVCXR_END_CONTENT` is displayed with that MIME type.

use crate::error::Result;
use crate::render::{Renderer, escape_html};
use serde_json::Value;
use std::io::Write;

/// Wrap markup in the evcxr rich output envelope
pub fn evcxr_html(html: &str) -> String {
    format!("EVCXR_BEGIN_CONTENT text/html\n{}\nEVCXR_END_CONTENT\n", html)
}

/// Render a message and display it in the current evcxr notebook cell
pub fn visualize_message(value: &Value) -> Result<()> {
    visualize_message_with(&Renderer::default(), value)
}

pub fn visualize_message_with(renderer: &Renderer, value: &Value) -> Result<()> {
    let html = renderer.render_value(value)?;
    write_evcxr(&mut std::io::stdout().lock(), &html)
}

fn write_evcxr<W: Write>(out: &mut W, html: &str) -> Result<()> {
    out.write_all(evcxr_html(html).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Wrap a fragment into a complete HTML5 document
pub fn standalone_document(html: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
</head>
<body style="max-width: 960px; margin: 0 auto; padding: 0 16px;">
{}
</body>
</html>
"#,
        escape_html(title),
        html
    )
}
