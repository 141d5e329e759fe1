//! reelbase CLI entrypoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reelbase::cli::Cli;
use reelbase::config;

fn main() -> Result<()> {
    // RUST_LOG wins over the configured level
    let default_level = config::config()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| config::DEFAULT_LOG_LEVEL.to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    cli.execute()
}
