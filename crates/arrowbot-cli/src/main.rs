//! Arrowbot binary.
//!
//! Captures the puzzle screen over adb, recognizes the board, solves it
//! and taps the solution back, then advances to the next level. Runs
//! until interrupted. With `--debug-file` it instead renders one
//! calibration image and exits.

mod bot;
mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "arrowbot_cli=info,arrowbot_device=info,arrowbot_vision=info".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = config::Args::parse();
    let config = config::BotConfig::resolve(args)?;
    tracing::debug!(?config, "resolved configuration");

    match config.debug_file.clone() {
        Some(path) => bot::render_calibration(&config, &path).await,
        None => bot::run(&config).await,
    }
}
