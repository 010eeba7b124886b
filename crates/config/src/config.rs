//! Harness configuration file.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{ConfigError, EnvSource, NetworkConfig, NetworkConnection};

/// Default solidity compiler version.
pub const DEFAULT_COMPILER_VERSION: &str = "0.8.9";
/// Default optimizer runs.
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 2000;
/// Default contract sources directory.
pub const DEFAULT_SOURCES_DIR: &str = "src";
/// Default deployments directory.
pub const DEFAULT_DEPLOYMENTS_DIR: &str = "deployments";
/// Default gas reporter currency.
pub const DEFAULT_CURRENCY: &str = "USD";
/// Default gas price used by the gas reporter, in gwei.
pub const DEFAULT_GAS_PRICE: u64 = 100;
/// Default maximum method gas difference shown by the gas reporter.
pub const DEFAULT_MAX_METHOD_DIFF: u32 = 10;
/// Default typed binding output directory.
pub const DEFAULT_TYPECHAIN_OUT_DIR: &str = "typechain";
/// Default typed binding target.
pub const DEFAULT_TYPECHAIN_TARGET: &str = "ethers-v5";
/// Default Tenderly project slug.
pub const DEFAULT_TENDERLY_PROJECT: &str = "template-ethereum-contracts";
/// Default test runner timeout, in milliseconds.
pub const DEFAULT_TEST_TIMEOUT_MS: u64 = 1_000_000_000;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Compiler settings.
    pub solidity: SolidityConfig,
    /// Account name to account index.
    pub named_accounts: BTreeMap<String, u32>,
    /// Networks by name.
    pub networks: BTreeMap<String, NetworkConfig>,
    /// Project paths.
    pub paths: PathsConfig,
    /// Gas reporter settings.
    pub gas_reporter: GasReporterConfig,
    /// Typed binding generation settings.
    pub typechain: TypechainConfig,
    /// Test runner settings.
    pub test: TestConfig,
    /// Tenderly settings.
    pub tenderly: TenderlyConfig,
}

/// Solidity compilers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolidityConfig {
    /// Compilers, one per version.
    pub compilers: Vec<CompilerConfig>,
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self { compilers: vec![CompilerConfig::default()] }
    }
}

/// A solidity compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Compiler version.
    pub version: String,
    /// Optimizer settings.
    pub optimizer: OptimizerConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self { version: DEFAULT_COMPILER_VERSION.to_string(), optimizer: OptimizerConfig::default() }
    }
}

/// Optimizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Whether the optimizer runs.
    pub enabled: bool,
    /// Expected number of contract invocations.
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self { enabled: true, runs: DEFAULT_OPTIMIZER_RUNS }
    }
}

/// Project paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory the config was loaded from; other paths are relative to it.
    #[serde(skip)]
    pub root: PathBuf,
    /// Contract sources.
    pub sources: PathBuf,
    /// Deployment artifacts.
    pub deployments: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sources: PathBuf::from(DEFAULT_SOURCES_DIR),
            deployments: PathBuf::from(DEFAULT_DEPLOYMENTS_DIR),
        }
    }
}

/// Static gas reporter settings; enablement and the API key come from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasReporterConfig {
    /// Fiat currency prices are shown in.
    pub currency: String,
    /// Gas price in gwei.
    pub gas_price: u64,
    /// Maximum method gas difference shown.
    pub max_method_diff: u32,
}

impl Default for GasReporterConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            gas_price: DEFAULT_GAS_PRICE,
            max_method_diff: DEFAULT_MAX_METHOD_DIFF,
        }
    }
}

/// Typed binding generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypechainConfig {
    /// Output directory.
    pub out_dir: PathBuf,
    /// Binding target.
    pub target: String,
}

impl Default for TypechainConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_TYPECHAIN_OUT_DIR),
            target: DEFAULT_TYPECHAIN_TARGET.to_string(),
        }
    }
}

/// Test runner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Per-test timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self { timeout_ms: DEFAULT_TEST_TIMEOUT_MS }
    }
}

/// Tenderly project; the username comes from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenderlyConfig {
    /// Project slug.
    pub project: String,
}

impl Default for TenderlyConfig {
    fn default() -> Self {
        Self { project: DEFAULT_TENDERLY_PROJECT.to_string() }
    }
}

impl HarnessConfig {
    /// Parse and validate a TOML document.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; relative paths in it resolve against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        let mut config = Self::parse(&contents)?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            config.paths.root = parent.to_path_buf();
        }
        Ok(config)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solidity.compilers.is_empty() {
            return Err(ConfigError::invalid("at least one compiler is required"));
        }
        if self.solidity.compilers.iter().any(|compiler| compiler.version.trim().is_empty()) {
            return Err(ConfigError::invalid("compiler with empty version"));
        }

        if self.named_accounts.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::invalid("named account with empty name"));
        }

        for (name, network) in &self.networks {
            if name.trim().is_empty() {
                return Err(ConfigError::invalid("network with empty name"));
            }
            if network.url.is_some() && network.node.is_some() {
                return Err(ConfigError::invalid(format!(
                    "network `{name}` sets both url and node"
                )));
            }
            if network.url.as_deref().is_some_and(|url| url.trim().is_empty()) {
                return Err(ConfigError::invalid(format!("network `{name}` has an empty URL")));
            }
            match &network.accounts {
                Some(crate::AccountsConfig::Mnemonic { count: 0, .. }) => {
                    return Err(ConfigError::invalid(format!(
                        "network `{name}` derives zero accounts"
                    )));
                }
                Some(crate::AccountsConfig::PrivateKeysFile { path })
                    if path.as_os_str().is_empty() =>
                {
                    return Err(ConfigError::invalid(format!(
                        "network `{name}` has an empty private key file path"
                    )));
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Names of the configured networks, sorted.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Resolve the network called `name` against `env`.
    pub fn network(&self, name: &str, env: &dyn EnvSource) -> Result<NetworkConnection, ConfigError> {
        let network = self
            .networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork { name: name.to_string() })?;
        network.resolve(name, env, &self.paths.root)
    }

    /// Directory holding deployment artifacts.
    pub fn deployments_dir(&self) -> PathBuf {
        self.paths.root.join(&self.paths.deployments)
    }
}
