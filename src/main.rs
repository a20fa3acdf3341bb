// churnsight - main.rs
// CLI entry point: logging init, config load, command dispatch

use anyhow::Context;
use clap::Parser;

use churnsight::cli::{execute, Cli};
use churnsight::config_loader::load_config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    execute(cli.command, &config)?;

    Ok(())
}
