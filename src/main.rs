use clap::Parser;
use healthchat::core::config::{self, CliOverrides, HealthChatConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "healthchat", about = "Terminal client for a HealthAI chat endpoint")]
struct Args {
    /// Chat endpoint URL (overrides config and HEALTHCHAT_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Seconds to wait for a reply before giving up
    #[arg(short, long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to healthchat.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("healthchat.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        HealthChatConfig::default()
    });

    let cli = CliOverrides {
        endpoint: args.endpoint,
        timeout_secs: args.timeout,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "HealthChat starting up: endpoint={} timeout={:?}",
        resolved.endpoint,
        resolved.request_timeout
    );

    healthchat::tui::run(resolved)
}
