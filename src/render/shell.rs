//! Container chrome around the block cards: header, usage strip, body wrapper.

use super::format::escape_html;
use super::style::{MONO, SERIF};
use crate::config::RenderConfig;
use crate::models::{Message, Usage};

const NOT_AVAILABLE: &str = "n/a";

/// Opening markup up to (and including) the block list wrapper
pub fn open(message: &Message, config: &RenderConfig) -> String {
    let field = |v: &Option<String>| escape_html(v.as_deref().unwrap_or(NOT_AVAILABLE));

    let mut html = format!(
        r#"<div class="cmv-message" style="font-family: {SERIF}; margin: 32px 0; border: 1px solid #000; background: #fff;">
<div class="cmv-header" style="background: #fff; color: #000; padding: 24px 32px; border-bottom: 3px solid #000;">
<h3 style="margin: 0 0 16px 0; font-size: 18px; font-weight: 700; letter-spacing: 0.05em; text-transform: uppercase;">{title}</h3>
<div style="display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; font-size: 13px; color: #333; font-family: {MONO};">
<div><strong>ID:</strong> {id}</div>
<div><strong>Model:</strong> {model}</div>
<div><strong>Stop:</strong> {stop}</div>
<div><strong>Role:</strong> {role}</div>
</div>
</div>
"#,
        title = escape_html(&config.title),
        id = field(&message.id),
        model = field(&message.model),
        stop = stop_label(message),
        role = field(&message.role),
    );

    if config.show_usage
        && let Some(usage) = &message.usage
    {
        html.push_str(&usage_strip(usage));
    }

    html.push_str(r#"<div class="cmv-blocks" style="background: #fff; padding: 0;">"#);
    html.push('\n');
    html
}

pub fn close() -> &'static str {
    "</div>\n</div>\n"
}

pub fn empty_notice() -> String {
    format!(
        r#"<div class="cmv-empty" style="padding: 28px 36px; color: #999; font-style: italic; font-family: {SERIF};">No content blocks</div>
"#
    )
}

fn stop_label(message: &Message) -> String {
    match (&message.stop_reason, &message.stop_sequence) {
        (Some(reason), Some(seq)) => format!("{} ({})", escape_html(reason), escape_html(seq)),
        (Some(reason), None) => escape_html(reason),
        (None, _) => NOT_AVAILABLE.to_string(),
    }
}

fn usage_strip(usage: &Usage) -> String {
    let token = |label: &str, n: u64| {
        format!(
            r#"<span style="margin-left: 20px; white-space: nowrap;">{label}: <strong style="color: #000;">{n}</strong> tokens</span>"#
        )
    };

    let mut parts = vec![
        token("Input", usage.input_tokens),
        token("Output", usage.output_tokens),
    ];
    if let Some(n) = usage.cache_creation_input_tokens {
        parts.push(token("Cache write", n));
    }
    if let Some(n) = usage.cache_read_input_tokens {
        parts.push(token("Cache read", n));
    }

    format!(
        r#"<div class="cmv-usage" style="background: #fff; padding: 16px 32px; border-bottom: 1px solid #ddd; font-size: 13px; font-family: {MONO}; color: #666; line-height: 1.8;"><strong style="color: #000;">Usage:</strong>{}</div>
"#,
        parts.join("")
    )
}
