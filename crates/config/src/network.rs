//! Network configuration and resolution.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use harness_types::networks::HARDHAT;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    ConfigError,
    env::{self, EnvSource, HARDHAT_FORK, HARDHAT_FORK_NUMBER, MINING_INTERVAL},
};

/// Default request timeout for a network, in milliseconds.
pub const DEFAULT_NETWORK_TIMEOUT_MS: u64 = 20_000;

/// Default number of accounts derived from a mnemonic.
pub const DEFAULT_ACCOUNT_COUNT: u32 = 20;

const fn default_account_count() -> u32 {
    DEFAULT_ACCOUNT_COUNT
}

/// Where a network's accounts come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AccountsConfig {
    /// Derive accounts from the mnemonic configured for `network`
    /// (or the shared mnemonic when `network` is absent).
    Mnemonic {
        /// Network whose `MNEMONIC_<NETWORK>` variable is used.
        #[serde(default)]
        network: Option<String>,
        /// Number of accounts to derive.
        #[serde(default = "default_account_count")]
        count: u32,
    },
    /// Read hex private keys from a file, one per line.
    PrivateKeysFile {
        /// Path of the key file, relative to the config root.
        path: PathBuf,
    },
}

/// Network entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Literal endpoint URL.
    pub url: Option<String>,
    /// Network whose node URL is looked up from the environment.
    pub node: Option<String>,
    /// Account source.
    pub accounts: Option<AccountsConfig>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Base fee of the first block (in-process network only).
    pub initial_base_fee_per_gas: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            url: None,
            node: None,
            accounts: None,
            timeout_ms: DEFAULT_NETWORK_TIMEOUT_MS,
            initial_base_fee_per_gas: None,
        }
    }
}

/// Accounts of a resolved network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountsSource {
    /// Derive `count` accounts from `phrase`.
    Mnemonic {
        /// BIP-39 phrase.
        phrase: String,
        /// Number of accounts.
        count: u32,
    },
    /// Hex private keys read from this file when the accounts are needed.
    PrivateKeysFile(PathBuf),
    /// Ask the node through `eth_accounts`.
    Remote,
}

/// Fork settings of the in-process network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForkingConfig {
    /// Network the fork is made from.
    pub network: String,
    /// Endpoint of the forked network.
    pub url: String,
    /// Block the fork is pinned to.
    pub block_number: Option<u64>,
}

/// Interval mining of the in-process network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MiningConfig {
    /// Minimum interval between blocks, in milliseconds.
    pub min_interval_ms: u64,
    /// Maximum interval between blocks, in milliseconds.
    pub max_interval_ms: u64,
}

impl MiningConfig {
    /// Parse `ms` or `min,max`.
    pub fn parse(value: &str) -> Option<Self> {
        let parse = |part: &str| part.trim().parse::<u64>().ok();
        match value.split_once(',') {
            Some((min, max)) => {
                let (min_interval_ms, max_interval_ms) = (parse(min)?, parse(max)?);
                (min_interval_ms <= max_interval_ms)
                    .then_some(Self { min_interval_ms, max_interval_ms })
            }
            None => parse(value).map(|ms| Self { min_interval_ms: ms, max_interval_ms: ms }),
        }
    }
}

/// A network with every environment lookup applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConnection {
    /// Network name.
    pub name: String,
    /// Endpoint, absent for the in-process network.
    pub url: Option<Url>,
    /// Account source.
    pub accounts: AccountsSource,
    /// Request timeout.
    pub timeout: Duration,
    /// Base fee of the first block.
    pub initial_base_fee_per_gas: Option<u64>,
    /// Fork settings, in-process network only.
    pub forking: Option<ForkingConfig>,
    /// Interval mining, in-process network only.
    pub mining: Option<MiningConfig>,
}

impl NetworkConfig {
    /// Resolve this entry, registered as `name`, against `env`.
    ///
    /// Relative key file paths are resolved against `root`. The key file
    /// itself is not read here.
    pub fn resolve(
        &self,
        name: &str,
        env: &dyn EnvSource,
        root: &Path,
    ) -> Result<NetworkConnection, ConfigError> {
        let url = match (&self.url, &self.node) {
            (Some(url), _) => Some(url.clone()),
            (None, Some(node)) => env::node_url(env, node)?,
            (None, None) => None,
        };
        let url = url
            .map(|url| {
                Url::parse(&url).map_err(|e| ConfigError::InvalidUrl {
                    network: name.to_string(),
                    url,
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let accounts = match &self.accounts {
            Some(AccountsConfig::Mnemonic { network, count }) => {
                AccountsSource::Mnemonic { phrase: env::mnemonic(env, network.as_deref()), count: *count }
            }
            Some(AccountsConfig::PrivateKeysFile { path }) => {
                AccountsSource::PrivateKeysFile(root.join(path))
            }
            None if name == HARDHAT => AccountsSource::Mnemonic {
                phrase: env::mnemonic(env, None),
                count: DEFAULT_ACCOUNT_COUNT,
            },
            None => AccountsSource::Remote,
        };

        let mut connection = NetworkConnection {
            name: name.to_string(),
            url,
            accounts,
            timeout: Duration::from_millis(self.timeout_ms),
            initial_base_fee_per_gas: self.initial_base_fee_per_gas,
            forking: None,
            mining: None,
        };

        if name == HARDHAT {
            apply_fork(&mut connection, env)?;
        }

        Ok(connection)
    }
}

/// Point the in-process network at `HARDHAT_FORK` and apply `MINING_INTERVAL`.
fn apply_fork(connection: &mut NetworkConnection, env: &dyn EnvSource) -> Result<(), ConfigError> {
    if let Some(value) = env.non_empty(MINING_INTERVAL) {
        let mining = MiningConfig::parse(&value)
            .ok_or(ConfigError::InvalidEnv { key: MINING_INTERVAL.to_string(), value })?;
        connection.mining = Some(mining);
    }

    let Some(fork) = env.non_empty(HARDHAT_FORK) else {
        return Ok(());
    };

    let block_number = env
        .non_empty(HARDHAT_FORK_NUMBER)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnv { key: HARDHAT_FORK_NUMBER.to_string(), value })
        })
        .transpose()?;

    match env::node_url(env, &fork)? {
        Some(url) => {
            debug!(fork = %fork, ?block_number, "forking in-process network");
            connection.forking = Some(ForkingConfig { network: fork.clone(), url, block_number });
        }
        None => warn!(fork = %fork, "no node url for fork network, forking disabled"),
    }

    connection.accounts =
        AccountsSource::Mnemonic { phrase: env::mnemonic(env, Some(&fork)), count: DEFAULT_ACCOUNT_COUNT };
    Ok(())
}

/// Read hex private keys, one per line, skipping blanks and `#` comments.
pub fn read_private_keys(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
