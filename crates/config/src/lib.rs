#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod config;
pub use config::{
    CompilerConfig, DEFAULT_COMPILER_VERSION, DEFAULT_CURRENCY, DEFAULT_DEPLOYMENTS_DIR,
    DEFAULT_GAS_PRICE, DEFAULT_MAX_METHOD_DIFF, DEFAULT_OPTIMIZER_RUNS, DEFAULT_SOURCES_DIR,
    DEFAULT_TENDERLY_PROJECT, DEFAULT_TEST_TIMEOUT_MS, DEFAULT_TYPECHAIN_OUT_DIR,
    DEFAULT_TYPECHAIN_TARGET, GasReporterConfig, HarnessConfig, OptimizerConfig, PathsConfig,
    SolidityConfig, TenderlyConfig, TestConfig, TypechainConfig,
};

pub mod env;
pub use env::{EnvSource, MapEnv, ProcessEnv};

mod error;
pub use error::ConfigError;

mod network;
pub use network::{
    AccountsConfig, AccountsSource, DEFAULT_ACCOUNT_COUNT, DEFAULT_NETWORK_TIMEOUT_MS,
    ForkingConfig, MiningConfig, NetworkConfig, NetworkConnection, read_private_keys,
};

mod settings;
pub use settings::{GasReporter, Settings, Tenderly};
