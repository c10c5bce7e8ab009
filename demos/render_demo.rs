use claude_message_visualizer::display::standalone_document;
use claude_message_visualizer::{RenderConfig, Renderer, adapt_message};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A response that used web search, cited its sources and called a client tool
    let response = json!({
        "id": "msg_01Aq9w938a90dw8q",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-5",
        "stop_reason": "tool_use",
        "content": [
            {"type": "thinking", "thinking": "Search first, then fetch the forecast.", "signature": "EqQBCgIYAhIM"},
            {"type": "server_tool_use", "id": "srvtoolu_01", "name": "web_search", "input": {"query": "San Francisco weather today"}},
            {"type": "web_search_tool_result", "tool_use_id": "srvtoolu_01", "content": [
                {"type": "web_search_result", "title": "San Francisco Forecast", "url": "https://weather.example/sf", "encrypted_content": "EqgfCioIARgBIiQ3YTAwMjY1Mi1mZjM5", "page_age": "2 hours ago"}
            ]},
            {"type": "text", "text": "It is mild and sunny in San Francisco today.", "citations": [
                {"type": "web_search_result_location", "url": "https://weather.example/sf", "title": "San Francisco Forecast", "cited_text": "Sunny, high of 68°F"}
            ]},
            {"type": "tool_use", "id": "toolu_01", "name": "get_weather", "input": {"location": "San Francisco, CA", "unit": "fahrenheit"}}
        ],
        "usage": {"input_tokens": 2095, "output_tokens": 503}
    });

    let message = adapt_message(&response)?;
    println!("Adapted {} blocks", message.blocks.len());

    let config = RenderConfig::from_env()?;
    config.validate()?;
    let renderer = Renderer::new(config);
    let html = renderer.render(&message);

    let path = std::env::temp_dir().join("claude_message_visualizer_demo.html");
    std::fs::write(&path, standalone_document(&html, &renderer.config().title))?;
    println!("Wrote {} bytes to {}", html.len(), path.display());

    Ok(())
}
