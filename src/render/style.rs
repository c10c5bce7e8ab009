use std::collections::HashMap;

pub const SERIF: &str = "'Georgia', 'Times New Roman', serif";
pub const MONO: &str = "'Menlo', 'Monaco', 'Courier New', monospace";
pub const ERROR_RED: &str = "#dc2626";

/// Visual identity of a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    pub icon: &'static str,
    pub color: &'static str,
    /// Hover description of what the block type is
    pub description: Option<&'static str>,
}

/// Style for types not in the table
pub const FALLBACK_STYLE: BlockStyle = BlockStyle {
    icon: "•",
    color: "#666",
    description: None,
};

lazy_static::lazy_static! {
    static ref BLOCK_STYLES: HashMap<&'static str, BlockStyle> = {
        let mut m = HashMap::new();
        m.insert("text", BlockStyle {
            icon: "§",
            color: "#000",
            description: Some("The main text content in Claude's response. This is where Claude writes its answers, explanations, and conversational replies."),
        });
        m.insert("tool_use", BlockStyle {
            icon: "⚙",
            color: "#000",
            description: Some("Claude is requesting your application to execute a tool or function. Your code must run the tool and return the result in the next API call."),
        });
        m.insert("tool_result", BlockStyle {
            icon: "✓",
            color: "#000",
            description: Some("The result returned from executing a tool that Claude requested. This data is provided by your application after running the tool."),
        });
        m.insert("server_tool_use", BlockStyle {
            icon: "◆",
            color: "#000",
            description: Some("Server tools are built and maintained by Anthropic, execute on Anthropic's infrastructure, and return results in the same API call. No client-side execution is required."),
        });
        m.insert("web_search_tool_result", BlockStyle {
            icon: "◇",
            color: "#000",
            description: Some("Results from a web search performed by Anthropic's servers. Contains search results that Claude can reference and cite in its response."),
        });
        m.insert("web_search_result", BlockStyle {
            icon: "·",
            color: "#666",
            description: None,
        });
        m.insert("image", BlockStyle {
            icon: "◉",
            color: "#000",
            description: Some("Image content included in the message. Can be provided as base64-encoded data or a URL reference."),
        });
        m.insert("thinking", BlockStyle {
            icon: "∴",
            color: "#666",
            description: Some("Extended thinking content showing Claude's internal reasoning process. This helps you understand how Claude approached the problem."),
        });
        m.insert("document", BlockStyle {
            icon: "▭",
            color: "#000",
            description: Some("Document content attached to the message, such as PDFs or other file types provided as base64-encoded data."),
        });
        m
    };
}

pub fn block_style(block_type: &str) -> BlockStyle {
    BLOCK_STYLES
        .get(block_type)
        .copied()
        .unwrap_or(FALLBACK_STYLE)
}

/// Human label for a type tag: "server_tool_use" -> "server tool use"
pub fn block_label(block_type: &str) -> String {
    block_type.replace('_', " ")
}
