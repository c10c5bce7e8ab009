//! Small string helpers shared by the block renderers.

use serde_json::Value;

/// Escape text for embedding in HTML element content or quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Pretty-print JSON with two-space indentation
///
/// Object keys keep the order they had in the source document.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::debug!("Pretty-printing failed, using compact form: {}", e);
        value.to_string()
    })
}

/// Text split at a character budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated<'a> {
    pub head: &'a str,
    /// Everything after the budget, if anything was cut
    pub rest: Option<&'a str>,
}

impl Truncated<'_> {
    pub fn is_truncated(&self) -> bool {
        self.rest.is_some()
    }
}

/// Split `text` after `budget` characters
pub fn truncate(text: &str, budget: usize) -> Truncated<'_> {
    match text.char_indices().nth(budget) {
        Some((byte_idx, _)) => Truncated {
            head: &text[..byte_idx],
            rest: Some(&text[byte_idx..]),
        },
        None => Truncated {
            head: text,
            rest: None,
        },
    }
}

/// Escaped preview with the remainder behind a "show more" disclosure
pub fn render_truncated(text: &str, budget: usize) -> String {
    let t = truncate(text, budget);
    match t.rest {
        None => escape_html(t.head),
        Some(rest) => format!(
            r#"{head}<details style="display: inline;"><summary style="cursor: pointer; color: #666; font-style: italic; display: inline;">… show more ({n} more characters)</summary>{rest}</details>"#,
            head = escape_html(t.head),
            n = rest.chars().count(),
            rest = escape_html(rest),
        ),
    }
}
