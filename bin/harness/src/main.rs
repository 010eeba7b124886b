//! Harness - deployment harness for the SimpleERC20 diamond
//!
//! Loads the network configuration, applies snapshot emulation on networks
//! that lack it and runs one harness command.

use clap::Parser;
use eyre::{Context, Result};
use harness_cli::{Cli, check_config, execute, init_tracing, log_config_summary};
use harness_config::{HarnessConfig, ProcessEnv};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_format)?;

    tracing::info!(config_path = %cli.config.display(), "Loading configuration");
    let config = HarnessConfig::from_file(&cli.config)
        .wrap_err_with(|| format!("failed to load config from {}", cli.config.display()))?;

    check_config!(cli);

    log_config_summary(&config, &cli.network);

    let output = execute(&cli, config, &ProcessEnv).await?;
    println!("{output}");
    Ok(())
}
