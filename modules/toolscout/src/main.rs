use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use producthunt_client::ProductHuntClient;
use toolscout::output::{render, OutputFormat};
use toolscout::{extract_listings, ScrapeRequest};
use toolscout_common::Config;

#[derive(Parser)]
#[command(
    name = "toolscout",
    about = "Extract the top AI tools from a Product Hunt topic page, with taglines and makers"
)]
struct Cli {
    /// Product Hunt topic slug [env: TOOLSCOUT_TOPIC, default: artificial-intelligence]
    #[arg(long)]
    topic: Option<String>,

    /// Number of tools to return [env: TOOLSCOUT_LIMIT, default: 5]
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Page fetch timeout in seconds [env: TOOLSCOUT_TIMEOUT_SECS, default: 20]
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Parse a local HTML file instead of fetching (no network access)
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

// Logs go to stderr so stdout stays parseable in JSON mode.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("toolscout=info,producthunt_client=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(topic) = cli.topic {
        config.topic = topic;
    }
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    config.log_redacted();

    let html = match &cli.html_file {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read HTML file {}", path.display()))?,
        ),
        None => None,
    };

    let request = ScrapeRequest {
        topic: config.topic.clone(),
        limit: config.limit,
        html,
        timeout: config.timeout(),
    };

    let client = ProductHuntClient::with_base_url(&config.base_url)?;
    let tools = extract_listings(&client, &request)
        .await
        .context("extraction failed")?;

    let rendered = render(&tools, cli.format)?;
    print!("{rendered}");
    if cli.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
