//! relay-bot CLI: run the Telegram to Gemini relay. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use relay_bot::{log_file_from_lookup, run_bot, BotConfig, Cli, Commands};
use relay_core::init_tracing;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            init_tracing(&log_file_from_lookup(|key| std::env::var(key).ok()))?;

            let config = match BotConfig::load(token) {
                Ok(config) => config,
                Err(e) => {
                    error!(error = %e, "Failed to load configuration");
                    return Err(e.into());
                }
            };
            run_bot(config).await
        }
    }
}
