//! Command-line interface definitions for the harness.
//!
//! This module provides the CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Macro to check CLI configuration and exit early if the check flag is set.
///
/// Prints a success message and returns `Ok(())` from the enclosing function
/// when `--check` was passed.
///
/// # Example
///
/// ```ignore
/// use harness_cli::{Cli, check_config};
/// use clap::Parser;
///
/// #[tokio::main]
/// async fn main() -> eyre::Result<()> {
///     let cli = Cli::parse();
///     // ... load config ...
///     check_config!(cli);
///     // ... run the command ...
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! check_config {
    ($cli:expr) => {
        if $cli.check {
            println!("Configuration is valid");
            return Ok(());
        }
    };
}

/// Log output format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Command-line interface for the deployment harness.
#[derive(Parser, Debug, Clone)]
#[command(name = "harness")]
#[command(about = "Deployment harness for the SimpleERC20 diamond")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "HARNESS_CONFIG", default_value = "harness.toml")]
    pub config: PathBuf,

    /// Network to operate on
    #[arg(short, long, env = "HARDHAT_NETWORK", default_value = "hardhat")]
    pub network: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Validate config and exit
    #[arg(long)]
    pub check: bool,

    /// Command to run (defaults to `networks`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Harness commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the configured networks
    Networks,
    /// Print the named accounts of the network
    Accounts,
    /// Send a JSON-RPC request through the network provider
    Send {
        /// Method name
        method: String,
        /// Positional parameters as a JSON array
        #[arg(default_value = "[]")]
        params: String,
    },
    /// Print the deployment plan of the selected deploy scripts
    Deploy {
        /// Only run scripts with one of these tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Print the deterministic deployment override of the network
    DeterministicDeployment,
    /// Print the settings resolved from the environment
    Settings,
}
