//! Per-variant block cards.

use super::RenderContext;
use super::format::{escape_html, pretty_json, render_truncated};
use super::style::{ERROR_RED, MONO, SERIF, block_label, block_style};
use crate::models::{
    Block, Citation, MediaSource, SearchResultEntry, ToolResultContent, WebSearchContent,
};
use serde_json::Value;

const PRE_STYLE: &str = "background: #fafafa; padding: 18px; border: 1px solid #e5e5e5; border-radius: 2px; overflow-x: auto; font-size: 13px; line-height: 1.7; font-family: 'Menlo', 'Monaco', monospace; color: #000;";
const SUMMARY_STYLE: &str = "cursor: pointer; color: #000; margin-bottom: 12px; font-size: 13px; font-weight: 600; font-family: 'Georgia', 'Times New Roman', serif;";
const LABEL_STYLE: &str = "color: #666; font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em;";
const PLACEHOLDER_STYLE: &str = "background: #fafafa; padding: 18px; border: 1px solid #e5e5e5; border-radius: 2px; margin-top: 12px; text-align: center; color: #666; font-family: 'Georgia', 'Times New Roman', serif;";

/// Where a card sits: a top-level section or a block nested in a tool result
#[derive(Debug, Clone, Copy)]
enum Placement {
    TopLevel(usize),
    Nested { index: usize, depth: usize },
}

/// Render one top-level block as a `<section class="cmv-block">`
pub fn render_block(ctx: &RenderContext, block: &Block, index: usize) -> String {
    card(ctx, block, Placement::TopLevel(index))
}

fn card(ctx: &RenderContext, block: &Block, placement: Placement) -> String {
    let tag = block.type_tag();
    let depth = match placement {
        Placement::TopLevel(_) => 0,
        Placement::Nested { depth, .. } => depth,
    };

    let mut html = match placement {
        Placement::TopLevel(index) => format!(
            r#"<section class="cmv-block" data-block-index="{index}" data-block-type="{t}" style="margin: 0; padding: 28px 36px; background: #fff; border-bottom: 1px solid #e5e5e5;">"#,
            t = escape_html(tag),
        ),
        Placement::Nested { .. } => format!(
            r#"<div class="cmv-nested-block" data-block-type="{t}" style="margin: 12px 0; padding: 16px 20px; background: #fff; border: 1px solid #e5e5e5;">"#,
            t = escape_html(tag),
        ),
    };
    html.push('\n');
    html.push_str(&card_header(ctx, tag, placement));

    let body = match block {
        Block::Text { text, citations } => render_text(ctx, text, citations),
        Block::ToolUse { id, name, input } => render_tool_use(id, name, input, false),
        Block::ServerToolUse { id, name, input } => render_tool_use(id, name, input, true),
        Block::ToolResult {
            tool_use_id,
            content,
            is_error,
        } => render_tool_result(ctx, tool_use_id, content, *is_error, depth),
        Block::WebSearchResult { content, .. } => render_web_search(ctx, content),
        Block::Thinking {
            thinking,
            signature,
        } => render_thinking(thinking, signature.as_deref()),
        Block::Image { source } => render_image(ctx, source),
        Block::Document { source, title } => render_document(ctx, source, title.as_deref()),
        Block::Unknown { block_type, raw } => render_unknown(block_type, raw),
        Block::Malformed {
            block_type,
            reason,
            raw,
        } => render_malformed(block_type, reason, raw),
    };
    html.push_str(&body);

    html.push_str(match placement {
        Placement::TopLevel(_) => "</section>\n",
        Placement::Nested { .. } => "</div>\n",
    });
    html
}

fn card_header(ctx: &RenderContext, tag: &str, placement: Placement) -> String {
    let style = block_style(tag);
    let title = match (ctx.config.show_tooltips, style.description) {
        (true, Some(desc)) => format!(r#" title="{}""#, escape_html(desc)),
        _ => String::new(),
    };
    let counter = match placement {
        Placement::TopLevel(index) => format!("Block {}", index),
        Placement::Nested { index, .. } => format!("Item {}", index),
    };

    format!(
        r#"<div style="display: flex; align-items: baseline; margin-bottom: 20px; font-family: {SERIF};">
<span style="font-size: 18px; margin-right: 10px; color: {color};">{icon}</span>
<strong{title} style="color: {color}; font-size: 13px; font-weight: 700; letter-spacing: 0.15em; text-transform: uppercase;">{label}</strong>
<span style="margin-left: auto; color: #bbb; font-size: 12px; font-weight: 400; font-family: {MONO};">{counter}</span>
</div>
"#,
        color = style.color,
        icon = style.icon,
        label = escape_html(&block_label(tag)),
    )
}

fn meta_line(items: &[(&str, String)], extra: &str) -> String {
    let fields: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let margin = if i == 0 { "" } else { "margin-left: 24px; " };
            format!(r#"<span style="{margin}color: #666;">{label}:</span> {value}"#)
        })
        .collect();
    format!(
        r#"<div style="margin-bottom: 16px; font-family: {MONO}; font-size: 12px;">{}{extra}</div>
"#,
        fields.join(" ")
    )
}

fn strong(value: &str) -> String {
    format!(r#"<strong style="color: #000;">{}</strong>"#, escape_html(value))
}

fn muted(value: &str) -> String {
    format!(r#"<span style="color: #999;">{}</span>"#, escape_html(value))
}

fn badge(class: &str, label: &str, background: &str) -> String {
    format!(
        r#"<span class="{class}" style="margin-left: 24px; padding: 2px 6px; background: {background}; color: #fff; font-weight: 700; font-size: 9px; letter-spacing: 0.05em; display: inline-block; vertical-align: middle;">{label}</span>"#
    )
}

fn notice(message: &str) -> String {
    format!(
        r#"<div class="cmv-notice" style="background: #fafafa; padding: 12px 16px; font-size: 13px; color: #999; font-style: italic; font-family: {SERIF}; border: 1px dashed #e5e5e5;">{}</div>
"#,
        escape_html(message)
    )
}

/// Only http(s) URLs become live links; anything else is shown as text
fn link(url: &str) -> String {
    let escaped = escape_html(url);
    if url.starts_with("https://") || url.starts_with("http://") {
        format!(
            r#"<a href="{escaped}" target="_blank" rel="noopener noreferrer" style="color: #000; text-decoration: underline; word-break: break-all;">{escaped}</a>"#
        )
    } else {
        format!(r#"<span style="word-break: break-all;">{escaped}</span>"#)
    }
}

fn render_text(ctx: &RenderContext, text: &str, citations: &[Citation]) -> String {
    if text.trim().is_empty() && citations.is_empty() {
        return notice("Empty text block");
    }

    let threshold = ctx.config.long_text_threshold;
    let body = render_truncated(text, threshold);

    let markers: String = citations
        .iter()
        .map(|c| citation_marker(ctx, c))
        .collect();

    let mut html = format!(
        r#"<div class="cmv-text" style="background: #fff; padding: 0; font-size: 15px; line-height: 1.8; font-family: {SERIF};">
<div style="white-space: pre-wrap; color: #000;">{body}{markers}</div>
"#
    );
    for citation in citations {
        html.push_str(&citation_note(ctx, citation));
    }
    html.push_str("</div>\n");
    html
}

fn citation_label(ctx: &RenderContext, citation: &Citation) -> String {
    match ctx.citations.number_for(citation) {
        Some(n) => format!("[{}]", n),
        None => "[*]".to_string(),
    }
}

fn citation_marker(ctx: &RenderContext, citation: &Citation) -> String {
    let label = citation_label(ctx, citation);
    let number = ctx
        .citations
        .number_for(citation)
        .map(|n| n.to_string())
        .unwrap_or_default();
    let excerpt = escape_html(&citation.cited_text);

    let inner = match citation.url.as_deref() {
        Some(url) if url.starts_with("https://") || url.starts_with("http://") => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" title="{excerpt}" style="color: {ERROR_RED}; text-decoration: none;">{label}</a>"#,
            escape_html(url)
        ),
        _ => format!(r#"<span title="{excerpt}" style="color: {ERROR_RED}; cursor: help;">{label}</span>"#),
    };
    format!(r#"<sup class="cmv-citation" data-citation="{number}">{inner}</sup>"#)
}

fn citation_note(ctx: &RenderContext, citation: &Citation) -> String {
    let source = match (&citation.title, &citation.url) {
        (Some(title), _) => format!(
            r#"<span style="color: #666; margin-left: 8px;">— {}</span>"#,
            escape_html(title)
        ),
        (None, Some(url)) => format!(
            r#"<span style="color: #666; margin-left: 8px;">— {}</span>"#,
            escape_html(url)
        ),
        (None, None) => String::new(),
    };

    format!(
        r#"<div class="cmv-citation-note" style="background: #f9f9f9; padding: 12px 16px; margin-top: 12px; border-left: 3px solid {ERROR_RED}; font-size: 13px; line-height: 1.6; font-family: {SERIF};">
<strong style="color: {ERROR_RED};">{label}</strong>
<span style="color: #333; margin-left: 8px;">"{excerpt}"</span>{source}
</div>
"#,
        label = citation_label(ctx, citation),
        excerpt = render_truncated(&citation.cited_text, ctx.config.citation_excerpt_limit),
    )
}

fn render_tool_use(id: &str, name: &str, input: &Value, server: bool) -> String {
    let extra = if server {
        badge("cmv-server-badge", "SERVER", "#000")
    } else {
        String::new()
    };
    let mut html = meta_line(&[("Tool", strong(name)), ("ID", muted(id))], &extra);
    html.push_str(&format!(
        r#"<details open>
<summary style="{SUMMARY_STYLE}">Input</summary>
<pre style="{PRE_STYLE}">{}</pre>
</details>
"#,
        escape_html(&pretty_json(input))
    ));
    html
}

fn render_tool_result(
    ctx: &RenderContext,
    tool_use_id: &str,
    content: &ToolResultContent,
    is_error: bool,
    depth: usize,
) -> String {
    let extra = if is_error {
        badge("cmv-error-badge", "ERROR", ERROR_RED)
    } else {
        String::new()
    };
    let mut html = meta_line(&[("Tool Use ID", muted(tool_use_id))], &extra);

    let border = if is_error {
        format!("border: 1px solid #e5e5e5; border-left: 3px solid {ERROR_RED};")
    } else {
        "border: 1px solid #e5e5e5;".to_string()
    };

    let inner = match content {
        ToolResultContent::Empty => notice("No content"),
        ToolResultContent::Text(text) => format!(
            r#"<div style="white-space: pre-wrap;">{}</div>"#,
            render_truncated(text, ctx.config.long_text_threshold)
        ),
        ToolResultContent::Blocks(nested) if depth + 1 > ctx.config.max_nesting_depth => {
            let tags: Vec<String> = nested
                .iter()
                .map(|b| format!("[{}]", escape_html(b.type_tag())))
                .collect();
            format!(
                "{}<div style=\"font-family: {MONO}; font-size: 12px;\">{}</div>",
                notice("Nested content too deep to display"),
                tags.join(" ")
            )
        }
        ToolResultContent::Blocks(nested) => nested
            .iter()
            .enumerate()
            .map(|(index, block)| {
                card(
                    ctx,
                    block,
                    Placement::Nested {
                        index,
                        depth: depth + 1,
                    },
                )
            })
            .collect::<String>(),
    };

    html.push_str(&format!(
        r#"<details open>
<summary style="{SUMMARY_STYLE}">Result</summary>
<div class="cmv-tool-result" style="background: #fafafa; padding: 18px; {border} border-radius: 2px; font-size: 13px; line-height: 1.7; font-family: {SERIF}; color: #000;">
{inner}</div>
</details>
"#
    ));
    html
}

fn render_web_search(ctx: &RenderContext, content: &WebSearchContent) -> String {
    match content {
        WebSearchContent::Error { error_code } => {
            let mut html = meta_line(
                &[("Search Error", strong(error_code))],
                &badge("cmv-error-badge", "ERROR", ERROR_RED),
            );
            html.push_str(&notice("The web search failed; no results were returned."));
            html
        }
        WebSearchContent::Results(results) => {
            let mut html = format!(
                r#"<div style="margin-bottom: 16px;">
<strong style="color: #000; font-size: 13px; font-weight: 600; font-family: {SERIF};">Search Results</strong>
<span style="color: #999; font-size: 12px; margin-left: 12px; font-family: {MONO};">{} results</span>
</div>
"#,
                results.len()
            );
            for (index, result) in results.iter().enumerate() {
                html.push_str(&render_search_entry(ctx, result, index));
            }
            html
        }
    }
}

fn render_search_entry(ctx: &RenderContext, result: &SearchResultEntry, index: usize) -> String {
    let cited = ctx
        .citations
        .get(&result.url)
        .map(|n| {
            format!(r#"<strong style="color: {ERROR_RED}; margin-left: 8px;">cited [{n}]</strong>"#)
        })
        .unwrap_or_default();

    let page_age = result
        .page_age
        .as_deref()
        .map(|age| {
            format!(
                r#"<div style="margin-bottom: 12px;"><span style="{LABEL_STYLE}">Page Age</span><br><span style="color: #000;">{}</span></div>
"#,
                escape_html(age)
            )
        })
        .unwrap_or_default();

    let content = match result.encrypted_content.as_deref() {
        Some(enc) => format!("Encrypted · {} characters", enc.chars().count()),
        None => "Not available".to_string(),
    };

    format!(
        r#"<details class="cmv-search-result" style="margin-top: 12px; border: 1px solid #ddd; border-radius: 2px; background: #fafafa;">
<summary style="cursor: pointer; padding: 12px 16px; font-family: {SERIF}; font-size: 14px; line-height: 1.6;"><strong style="color: #000; font-weight: 600;">Result {n}</strong><span style="color: #333; margin-left: 8px;">{title}</span>{cited}</summary>
<div style="padding: 16px; background: #fff; border-top: 1px solid #e5e5e5; font-size: 13px; line-height: 1.8; font-family: {SERIF};">
<div style="margin-bottom: 12px;"><span style="{LABEL_STYLE}">URL</span><br>{url}</div>
{page_age}<div><span style="{LABEL_STYLE}">Content</span><br><span style="color: #999; font-size: 12px; font-family: {MONO};">{content}</span></div>
</div>
</details>
"#,
        n = index + 1,
        title = escape_html(&result.title),
        url = link(&result.url),
    )
}

fn render_thinking(thinking: &str, signature: Option<&str>) -> String {
    let signed = signature
        .map(|sig| {
            format!(
                r#"<div style="margin-top: 8px; color: #999; font-size: 12px; font-family: {MONO};">Signed · {} character signature</div>
"#,
                sig.chars().count()
            )
        })
        .unwrap_or_default();

    format!(
        r#"<details class="cmv-thinking">
<summary style="cursor: pointer; color: #666; margin-bottom: 12px; font-size: 13px; font-weight: 600; font-family: {SERIF}; font-style: italic;">Extended Thinking ({n} characters) — Click to view</summary>
<div style="background: #fafafa; padding: 18px; border: 1px solid #e5e5e5; border-left: 3px solid #666; border-radius: 2px; white-space: pre-wrap; font-size: 13px; line-height: 1.7; color: #333; font-family: {SERIF}; font-style: italic;">{body}</div>
{signed}</details>
"#,
        n = thinking.chars().count(),
        body = escape_html(thinking),
    )
}

/// Decoded size of base64 data, ignoring padding and whitespace
fn decoded_len(data: &str) -> usize {
    let significant = data
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '=')
        .count();
    significant * 3 / 4
}

fn media_meta(source: &MediaSource) -> String {
    let mut items = vec![("Source Type", strong(source.source_type()))];
    match source {
        MediaSource::Base64 { media_type, data } | MediaSource::Text { media_type, data } => {
            let size = match source {
                MediaSource::Base64 { .. } => decoded_len(data),
                _ => data.len(),
            };
            items.push(("Media Type", strong(media_type)));
            items.push(("Size", muted(&format!("{} bytes", size))));
        }
        MediaSource::Url { url } => items.push(("URL", link(url))),
        MediaSource::Other { .. } => {}
    }
    meta_line(&items, "")
}

fn placeholder(title: &str, detail: &str) -> String {
    format!(
        r#"<div class="cmv-placeholder" style="{PLACEHOLDER_STYLE}"><strong>{}</strong><br><span style="font-size: 12px;">{}</span></div>
"#,
        escape_html(title),
        escape_html(detail)
    )
}

fn render_image(ctx: &RenderContext, source: &MediaSource) -> String {
    let mut html = media_meta(source);
    let preview = match source {
        MediaSource::Base64 { media_type, data }
            if ctx.config.inline_images && media_type.starts_with("image/") =>
        {
            format!(
                r#"<div style="margin-top: 12px;"><img src="data:{};base64,{}" style="max-width: 100%; height: auto; border: 1px solid #ddd; border-radius: 2px;" alt="Content image" /></div>
"#,
                escape_html(media_type),
                escape_html(data)
            )
        }
        MediaSource::Base64 { media_type, .. } if !ctx.config.inline_images => {
            placeholder("Image Preview Disabled", &format!("Base64-encoded image: {}", media_type))
        }
        MediaSource::Base64 { media_type, .. } => placeholder(
            "Image Preview Not Available",
            &format!("Unsupported media type: {}", media_type),
        ),
        MediaSource::Url { .. } => {
            placeholder("Remote Image Not Loaded", "Open the URL above to view the image.")
        }
        MediaSource::Text { .. } | MediaSource::Other { .. } => placeholder(
            "Image Preview Not Available",
            &format!("Source type: {}", source.source_type()),
        ),
    };
    html.push_str(&preview);
    html
}

fn render_document(ctx: &RenderContext, source: &MediaSource, title: Option<&str>) -> String {
    let mut html = String::new();
    if let Some(title) = title {
        html.push_str(&format!(
            r#"<div style="margin-bottom: 12px; font-size: 15px; font-family: {SERIF};"><strong>{}</strong></div>
"#,
            escape_html(title)
        ));
    }
    html.push_str(&media_meta(source));

    let preview = match source {
        MediaSource::Base64 { media_type, .. } => placeholder(
            "Document Preview Not Available",
            &format!("Base64-encoded document: {}", media_type),
        ),
        MediaSource::Text { data, .. } => format!(
            r#"<div style="{PRE_STYLE} white-space: pre-wrap; font-family: {SERIF};">{}</div>
"#,
            render_truncated(data, ctx.config.long_text_threshold)
        ),
        MediaSource::Url { .. } => placeholder(
            "Remote Document Not Loaded",
            "Open the URL above to view the document.",
        ),
        MediaSource::Other { source_type } => placeholder(
            "Document Preview Not Available",
            &format!("Source type: {}", source_type),
        ),
    };
    html.push_str(&preview);
    html
}

fn render_unknown(block_type: &str, raw: &Value) -> String {
    format!(
        r#"<div class="cmv-fallback">
{}<pre style="{PRE_STYLE} margin-top: 12px;">{}</pre>
</div>
"#,
        notice(&format!("Unrecognized block type: {}", block_type)),
        escape_html(&pretty_json(raw))
    )
}

fn render_malformed(block_type: &str, reason: &str, raw: &Value) -> String {
    format!(
        r#"<div class="cmv-fallback cmv-unparseable">
<div style="padding: 12px 16px; border-left: 3px solid {ERROR_RED}; background: #fff5f5; font-size: 13px; font-family: {SERIF};"><strong style="color: {ERROR_RED};">Unparseable block</strong> <span style="color: #666;">({})</span><br><span style="color: #333;">{}</span></div>
<pre style="{PRE_STYLE} margin-top: 12px;">{}</pre>
</div>
"#,
        escape_html(block_type),
        escape_html(reason),
        escape_html(&pretty_json(raw))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citation::CitationIndex;
    use crate::config::RenderConfig;
    use crate::models::Message;
    use serde_json::json;

    fn render_one(config: &RenderConfig, block: Block) -> String {
        let message = Message {
            blocks: vec![block],
            ..Default::default()
        };
        let ctx = RenderContext {
            config,
            citations: CitationIndex::build(&message),
        };
        render_block(&ctx, &message.blocks[0], 0)
    }

    fn web_citation(url: &str, quote: &str) -> Citation {
        Citation {
            kind: "web_search_result_location".to_string(),
            url: Some(url.to_string()),
            title: Some("Source".to_string()),
            cited_text: quote.to_string(),
            document_index: None,
        }
    }

    #[test]
    fn test_text_escapes_script() {
        let html = render_one(
            &RenderConfig::default(),
            Block::Text {
                text: "<script>alert(1)</script>".to_string(),
                citations: vec![],
            },
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_empty_text_notice() {
        let html = render_one(
            &RenderConfig::default(),
            Block::Text {
                text: "  \n".to_string(),
                citations: vec![],
            },
        );
        assert!(html.contains("Empty text block"));
    }

    #[test]
    fn test_long_text_collapsed_but_complete() {
        let config = RenderConfig {
            long_text_threshold: 10,
            ..Default::default()
        };
        let text = "0123456789ABCDEFGHIJ".to_string();
        let html = render_one(
            &config,
            Block::Text {
                text,
                citations: vec![],
            },
        );
        assert!(html.contains("0123456789<details"));
        assert!(html.contains("ABCDEFGHIJ"));
        assert!(html.contains("show more (10 more characters)"));
    }

    #[test]
    fn test_citation_markers_share_numbers() {
        let html = render_one(
            &RenderConfig::default(),
            Block::Text {
                text: "Claim".to_string(),
                citations: vec![
                    web_citation("https://a.example", "first quote"),
                    web_citation("https://b.example", "second quote"),
                    web_citation("https://a.example", "third quote"),
                ],
            },
        );
        assert_eq!(html.matches(r#"data-citation="1""#).count(), 2);
        assert_eq!(html.matches(r#"data-citation="2""#).count(), 1);
        assert!(html.contains(r#"title="first quote""#));
        assert!(html.contains(r#"href="https://b.example""#));
    }

    #[test]
    fn test_citation_without_source() {
        let html = render_one(
            &RenderConfig::default(),
            Block::Text {
                text: "Claim".to_string(),
                citations: vec![Citation {
                    kind: "content_block_location".to_string(),
                    url: None,
                    title: None,
                    cited_text: "quote".to_string(),
                    document_index: None,
                }],
            },
        );
        assert!(html.contains("[*]"));
        assert!(html.contains(r#"title="quote""#));
    }

    #[test]
    fn test_non_http_url_not_linked() {
        let html = render_one(
            &RenderConfig::default(),
            Block::Text {
                text: "Claim".to_string(),
                citations: vec![web_citation("javascript:alert(1)", "quote")],
            },
        );
        assert!(!html.contains("href=\"javascript:"));
    }

    #[test]
    fn test_tool_use_pretty_input() {
        let html = render_one(
            &RenderConfig::default(),
            Block::ToolUse {
                id: "toolu_1".to_string(),
                name: "get_weather".to_string(),
                input: json!({"location": "SF", "unit": "celsius"}),
            },
        );
        assert!(html.contains("get_weather"));
        assert!(html.contains("toolu_1"));
        assert!(html.contains("&quot;location&quot;: &quot;SF&quot;"));
        assert!(html.find("location").unwrap() < html.find("unit").unwrap());
        assert!(!html.contains("cmv-server-badge"));
    }

    #[test]
    fn test_server_tool_use_badge() {
        let html = render_one(
            &RenderConfig::default(),
            Block::ServerToolUse {
                id: "srvtoolu_1".to_string(),
                name: "web_search".to_string(),
                input: json!({"query": "weather"}),
            },
        );
        assert!(html.contains("cmv-server-badge"));
        assert!(html.contains("SERVER"));
    }

    #[test]
    fn test_tool_result_error_marker() {
        let config = RenderConfig::default();
        let ok = render_one(
            &config,
            Block::ToolResult {
                tool_use_id: "toolu_1".to_string(),
                content: ToolResultContent::Text("fine".to_string()),
                is_error: false,
            },
        );
        let err = render_one(
            &config,
            Block::ToolResult {
                tool_use_id: "toolu_1".to_string(),
                content: ToolResultContent::Text("boom".to_string()),
                is_error: true,
            },
        );
        assert!(!ok.contains("cmv-error-badge"));
        assert!(err.contains("cmv-error-badge"));
        assert!(err.contains("ERROR"));
    }

    #[test]
    fn test_tool_result_nested_blocks() {
        let html = render_one(
            &RenderConfig::default(),
            Block::ToolResult {
                tool_use_id: "toolu_1".to_string(),
                content: ToolResultContent::Blocks(vec![
                    Block::Text {
                        text: "nested text".to_string(),
                        citations: vec![],
                    },
                    Block::Unknown {
                        block_type: "future".to_string(),
                        raw: json!({"type": "future"}),
                    },
                ]),
                is_error: false,
            },
        );
        assert_eq!(html.matches("class=\"cmv-block\"").count(), 1);
        assert_eq!(html.matches("class=\"cmv-nested-block\"").count(), 2);
        assert!(html.contains("nested text"));
        assert!(html.contains("Unrecognized block type: future"));
    }

    #[test]
    fn test_tool_result_depth_limit() {
        let config = RenderConfig {
            max_nesting_depth: 1,
            ..Default::default()
        };
        let inner = Block::ToolResult {
            tool_use_id: "toolu_2".to_string(),
            content: ToolResultContent::Blocks(vec![Block::Text {
                text: "deep".to_string(),
                citations: vec![],
            }]),
            is_error: false,
        };
        let html = render_one(
            &config,
            Block::ToolResult {
                tool_use_id: "toolu_1".to_string(),
                content: ToolResultContent::Blocks(vec![inner]),
                is_error: false,
            },
        );
        assert_eq!(html.matches("class=\"cmv-nested-block\"").count(), 1);
        assert!(html.contains("Nested content too deep"));
        assert!(html.contains("[text]"));
    }

    #[test]
    fn test_web_search_entries() {
        let html = render_one(
            &RenderConfig::default(),
            Block::WebSearchResult {
                tool_use_id: Some("srvtoolu_1".to_string()),
                content: WebSearchContent::Results(vec![
                    SearchResultEntry {
                        title: "Forecast".to_string(),
                        url: "https://weather.example".to_string(),
                        page_age: Some("1 day ago".to_string()),
                        encrypted_content: Some("abcd".to_string()),
                    },
                    SearchResultEntry {
                        title: "Other".to_string(),
                        url: "https://other.example".to_string(),
                        page_age: None,
                        encrypted_content: None,
                    },
                ]),
            },
        );
        assert!(html.contains("2 results"));
        assert_eq!(html.matches("cmv-search-result").count(), 2);
        assert!(html.contains("Encrypted · 4 characters"));
        assert!(!html.contains(">abcd<"));
        assert_eq!(html.matches("Page Age").count(), 1);
    }

    #[test]
    fn test_thinking_collapsed_full_text() {
        let thinking = "x".repeat(5000);
        let html = render_one(
            &RenderConfig::default(),
            Block::Thinking {
                thinking: thinking.clone(),
                signature: Some("sig".to_string()),
            },
        );
        assert!(html.contains("<details class=\"cmv-thinking\">"));
        assert!(!html.contains("<details class=\"cmv-thinking\" open"));
        assert!(html.contains("Extended Thinking (5000 characters)"));
        assert!(html.contains(&thinking));
        assert!(html.contains("3 character signature"));
    }

    #[test]
    fn test_image_sources() {
        let config = RenderConfig::default();
        let html = render_one(
            &config,
            Block::Image {
                source: MediaSource::Base64 {
                    media_type: "image/png".to_string(),
                    data: "iVBORw0KGgo=".to_string(),
                },
            },
        );
        assert!(html.contains("data:image/png;base64,iVBORw0KGgo="));
        assert!(html.contains("8 bytes"));

        let html = render_one(
            &config,
            Block::Image {
                source: MediaSource::Url {
                    url: "https://img.example/cat.png".to_string(),
                },
            },
        );
        assert!(!html.contains("<img"));
        assert!(html.contains("Remote Image Not Loaded"));

        let no_inline = RenderConfig {
            inline_images: false,
            ..Default::default()
        };
        let html = render_one(
            &no_inline,
            Block::Image {
                source: MediaSource::Base64 {
                    media_type: "image/png".to_string(),
                    data: "iVBORw0KGgo=".to_string(),
                },
            },
        );
        assert!(!html.contains("<img"));
        assert!(html.contains("Image Preview Disabled"));

        let html = render_one(
            &config,
            Block::Image {
                source: MediaSource::Base64 {
                    media_type: "application/octet-stream".to_string(),
                    data: "AAEC".to_string(),
                },
            },
        );
        assert!(!html.contains("<img"));
        assert!(!html.contains("Image Preview Disabled"));
        assert!(html.contains("Image Preview Not Available"));
        assert!(html.contains("Unsupported media type: application/octet-stream"));
    }

    #[test]
    fn test_document_sources() {
        let config = RenderConfig::default();
        let html = render_one(
            &config,
            Block::Document {
                source: MediaSource::Base64 {
                    media_type: "application/pdf".to_string(),
                    data: "JVBERi0x".to_string(),
                },
                title: Some("Q3 Report".to_string()),
            },
        );
        assert!(html.contains("Q3 Report"));
        assert!(html.contains("Document Preview Not Available"));
        assert!(html.contains("application/pdf"));

        let html = render_one(
            &config,
            Block::Document {
                source: MediaSource::Text {
                    media_type: "text/plain".to_string(),
                    data: "<notes>".to_string(),
                },
                title: None,
            },
        );
        assert!(html.contains("&lt;notes&gt;"));
    }

    #[test]
    fn test_fallback_cards() {
        let config = RenderConfig::default();
        let html = render_one(
            &config,
            Block::Unknown {
                block_type: "redacted_thinking".to_string(),
                raw: json!({"type": "redacted_thinking", "data": "opaque"}),
            },
        );
        assert!(html.contains("data-block-type=\"redacted_thinking\""));
        assert!(html.contains("Unrecognized block type: redacted_thinking"));
        assert!(html.contains("opaque"));

        let html = render_one(
            &config,
            Block::Malformed {
                block_type: "tool_use".to_string(),
                reason: "missing field `name`".to_string(),
                raw: json!({"type": "tool_use"}),
            },
        );
        assert!(html.contains("Unparseable block"));
        assert!(html.contains("missing field `name`"));
    }

    #[test]
    fn test_tooltips_toggle() {
        let block = Block::Text {
            text: "hi".to_string(),
            citations: vec![],
        };
        let with = render_one(&RenderConfig::default(), block.clone());
        assert!(with.contains("title=\"The main text content"));

        let without = render_one(
            &RenderConfig {
                show_tooltips: false,
                ..Default::default()
            },
            block,
        );
        assert!(!without.contains("title=\"The main text content"));
    }

    #[test]
    fn test_decoded_len() {
        assert_eq!(decoded_len("iVBORw0KGgo="), 8);
        assert_eq!(decoded_len("TWFu"), 3);
        assert_eq!(decoded_len(""), 0);
    }
}
