// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use media_factory::cli::{execute_command, Cli};
use media_factory::config::AppConfig;
use media_factory::utils::log_utils::init_logging;

fn main() -> Result<()> {
    // Initialize environment
    dotenv::dotenv().ok();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log_level);

    // Execute command
    execute_command(cli.command, &config)
}
