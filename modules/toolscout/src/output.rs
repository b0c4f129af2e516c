use clap::ValueEnum;
use toolscout_common::AiTool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(tools: &[AiTool], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(tools)),
        OutputFormat::Json => render_json(tools),
    }
}

/// Pretty JSON array. Non-ASCII text is written as-is.
pub fn render_json(tools: &[AiTool]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tools)
}

/// Numbered blocks, one per tool, separated by a blank line.
pub fn render_text(tools: &[AiTool]) -> String {
    tools
        .iter()
        .enumerate()
        .map(|(index, tool)| text_block(index + 1, tool))
        .collect::<Vec<_>>()
        .join("\n")
}

fn text_block(position: usize, tool: &AiTool) -> String {
    let tagline = if tool.tagline.is_empty() {
        "(no information)"
    } else {
        tool.tagline.as_str()
    };
    let makers = if tool.makers.is_empty() {
        "unknown".to_string()
    } else {
        tool.makers.join(", ")
    };

    let mut block = format!(
        "{position}. {name}\n   Tagline: {tagline}\n   Makers: {makers}\n   Product Hunt: {url}\n",
        name = tool.name,
        url = tool.product_hunt_url,
    );
    if let Some(url) = tool.external_url.as_deref().filter(|u| !u.is_empty()) {
        block.push_str(&format!("   Website: {url}\n"));
    }
    if let Some(votes) = tool.votes_count {
        block.push_str(&format!("   Votes: {votes}\n"));
    }
    block
}
