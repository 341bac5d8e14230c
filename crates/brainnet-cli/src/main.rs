//! CLI entry point - the composition root.
//!
//! Loads `.env`, reads settings, installs tracing and hands off to the Axum
//! adapter, which owns the process-wide state for the life of the server.

use clap::Parser;

use brainnet_cli::{Cli, init_tracing};
use brainnet_core::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.command.apply_overrides(Settings::from_env()?);

    init_tracing(&settings, cli.verbose);

    let config = cli.command.server_config(&settings);
    tracing::info!(
        target: "brainnet.cli",
        variant = ?config.variant,
        addr = %config.bind_addr(),
        "Starting {}",
        settings.app_name
    );

    brainnet_axum::start_server(config, settings).await
}
