//! Environment lookups.
//!
//! Every value the harness reads from the environment goes through an
//! [`EnvSource`], so resolution can be exercised against a fixed map.

use std::collections::BTreeMap;

use harness_types::networks::LOCALHOST;

use crate::ConfigError;

/// Per-network node endpoint, suffixed with the upper-cased network name.
pub const ETH_NODE_URI_PREFIX: &str = "ETH_NODE_URI_";
/// Shared node endpoint, may contain `{{networkName}}`.
pub const ETH_NODE_URI: &str = "ETH_NODE_URI";
/// Per-network mnemonic, suffixed with the upper-cased network name.
pub const MNEMONIC_PREFIX: &str = "MNEMONIC_";
/// Shared mnemonic.
pub const MNEMONIC: &str = "MNEMONIC";
/// Network the in-process network forks from.
pub const HARDHAT_FORK: &str = "HARDHAT_FORK";
/// Block the fork is pinned to.
pub const HARDHAT_FORK_NUMBER: &str = "HARDHAT_FORK_NUMBER";
/// Interval mining for the in-process network, `ms` or `min,max`.
pub const MINING_INTERVAL: &str = "MINING_INTERVAL";
/// Enables gas reporting when set.
pub const REPORT_GAS: &str = "REPORT_GAS";
/// API key of the price lookup service used by the gas reporter.
pub const COINMARKETCAP_API_KEY: &str = "COINMARKETCAP_API_KEY";
/// Tenderly account name.
pub const TENDERLY_USERNAME: &str = "TENDERLY_USERNAME";

/// Endpoint of a development node on this machine.
pub const DEFAULT_LOCALHOST_URL: &str = "http://localhost:8545";

/// Well-known development mnemonic used when none is configured.
pub const DEFAULT_MNEMONIC: &str = "test test test test test test test test test test test junk";

const NETWORK_NAME_PLACEHOLDER: &str = "{{networkName}}";

/// Source of environment variables.
pub trait EnvSource {
    /// Value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an empty value as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv(BTreeMap<String, String>);

impl MapEnv {
    /// Create an empty environment.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a variable.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Node endpoint for `network`.
///
/// Looks up `ETH_NODE_URI_<NETWORK>` first. `localhost` then falls back to
/// [`DEFAULT_LOCALHOST_URL`]; other networks fall back to `ETH_NODE_URI` with
/// `{{networkName}}` replaced. Returns `None` when nothing is configured.
pub fn node_url(env: &dyn EnvSource, network: &str) -> Result<Option<String>, ConfigError> {
    if !network.is_empty() {
        let key = format!("{ETH_NODE_URI_PREFIX}{}", network.to_uppercase());
        if let Some(uri) = env.non_empty(&key) {
            return Ok(Some(uri));
        }
    }

    if network == LOCALHOST {
        return Ok(Some(DEFAULT_LOCALHOST_URL.to_string()));
    }

    let Some(uri) = env.non_empty(ETH_NODE_URI) else {
        return Ok(None);
    };
    let uri = uri.replace(NETWORK_NAME_PLACEHOLDER, network);
    if uri.contains("{{") {
        return Err(ConfigError::UnsupportedNodeUri { uri });
    }
    Ok(Some(uri))
}

/// Mnemonic for `network`: `MNEMONIC_<NETWORK>`, then `MNEMONIC`, then
/// [`DEFAULT_MNEMONIC`].
pub fn mnemonic(env: &dyn EnvSource, network: Option<&str>) -> String {
    network
        .filter(|name| !name.is_empty())
        .and_then(|name| env.non_empty(&format!("{MNEMONIC_PREFIX}{}", name.to_uppercase())))
        .or_else(|| env.non_empty(MNEMONIC))
        .unwrap_or_else(|| DEFAULT_MNEMONIC.to_string())
}
