//! Tracing setup.

use eyre::{Context, Result, eyre};
use harness_config::HarnessConfig;
use tracing_subscriber::EnvFilter;

use crate::LogFormat;

/// Initialise `tracing` with the given level and format.
///
/// Logs go to stderr so command output on stdout stays machine readable.
pub fn init_tracing(level: &str, format: LogFormat) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).wrap_err_with(|| format!("invalid log level `{level}`"))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| eyre!("failed to initialise tracing: {e}"))
}

/// Log a summary of the loaded configuration.
pub fn log_config_summary(config: &HarnessConfig, network: &str) {
    info!(
        network,
        networks = config.networks.len(),
        named_accounts = config.named_accounts.len(),
        "Configuration loaded"
    );

    for compiler in &config.solidity.compilers {
        debug!(
            version = %compiler.version,
            optimizer = compiler.optimizer.enabled,
            runs = compiler.optimizer.runs,
            "Compiler"
        );
    }

    for (name, network) in &config.networks {
        debug!(
            name = %name,
            url = ?network.url,
            node = ?network.node,
            timeout_ms = network.timeout_ms,
            "Network"
        );
    }

    if !config.networks.contains_key(network) {
        warn!(network, "active network is not configured");
    }
}
