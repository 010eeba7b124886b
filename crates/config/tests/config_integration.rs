//! Integration tests for configuration
//!
//! These tests load the project's `harness.toml` and resolve it against
//! fixed environments.

use std::{path::PathBuf, time::Duration};

use harness_config::{
    AccountsConfig, AccountsSource, DEFAULT_ACCOUNT_COUNT, DEFAULT_NETWORK_TIMEOUT_MS,
    HarnessConfig, MapEnv, env::DEFAULT_MNEMONIC,
};

const PROJECT_CONFIG: &str = include_str!("../../../harness.toml");

fn project_config() -> HarnessConfig {
    HarnessConfig::parse(PROJECT_CONFIG).unwrap()
}

// =============================================================================
// Project Configuration Tests
// =============================================================================

/// The shipped configuration parses and validates.
#[test]
fn test_project_config_parses() {
    let config = project_config();

    assert_eq!(config.solidity.compilers.len(), 1);
    assert_eq!(config.solidity.compilers[0].version, "0.8.9");
    assert!(config.solidity.compilers[0].optimizer.enabled);
    assert_eq!(config.solidity.compilers[0].optimizer.runs, 2000);

    assert_eq!(config.named_accounts.len(), 2);
    assert_eq!(config.named_accounts["deployer"], 0);
    assert_eq!(config.named_accounts["simpleERC20Beneficiary"], 0);

    assert_eq!(config.paths.sources, PathBuf::from("src"));
    assert_eq!(config.gas_reporter.currency, "USD");
    assert_eq!(config.gas_reporter.gas_price, 100);
    assert_eq!(config.gas_reporter.max_method_diff, 10);
    assert_eq!(config.typechain.target, "ethers-v5");
    assert_eq!(config.test.timeout_ms, 1_000_000_000);
    assert_eq!(config.tenderly.project, "template-ethereum-contracts");
}

/// Every network of the project is configured.
#[test]
fn test_project_networks() {
    let config = project_config();
    let mut names: Vec<_> = config.network_names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "goerli",
            "hardhat",
            "kovan",
            "localhost",
            "mainnet",
            "neonDevnet",
            "neonLocal",
            "production",
            "rinkeby",
            "staging",
        ]
    );

    assert_eq!(config.networks["hardhat"].initial_base_fee_per_gas, Some(0));
    assert_eq!(config.networks["staging"].node.as_deref(), Some("rinkeby"));
    assert_eq!(config.networks["production"].node.as_deref(), Some("mainnet"));
    assert_eq!(config.networks["goerli"].timeout_ms, DEFAULT_NETWORK_TIMEOUT_MS);
    assert_eq!(
        config.networks["kovan"].accounts,
        Some(AccountsConfig::Mnemonic { network: Some("kovan".to_string()), count: DEFAULT_ACCOUNT_COUNT })
    );
}

// =============================================================================
// Resolution Tests
// =============================================================================

/// `localhost` resolves without any environment.
#[test]
fn test_resolve_localhost() {
    let connection = project_config().network("localhost", &MapEnv::new()).unwrap();
    assert_eq!(connection.url.unwrap().as_str(), "http://localhost:8545/");
    assert_eq!(
        connection.accounts,
        AccountsSource::Mnemonic { phrase: DEFAULT_MNEMONIC.to_string(), count: DEFAULT_ACCOUNT_COUNT }
    );
}

/// `staging` uses the rinkeby endpoint and mnemonic.
#[test]
fn test_resolve_staging() {
    let env = MapEnv::new()
        .with("ETH_NODE_URI", "https://{{networkName}}.infura.io/v3/key")
        .with("MNEMONIC_RINKEBY", "rinkeby words");
    let connection = project_config().network("staging", &env).unwrap();
    assert_eq!(connection.name, "staging");
    assert_eq!(connection.url.unwrap().as_str(), "https://rinkeby.infura.io/v3/key");
    assert_eq!(
        connection.accounts,
        AccountsSource::Mnemonic { phrase: "rinkeby words".to_string(), count: DEFAULT_ACCOUNT_COUNT }
    );
}

/// Neon networks take their keys from the key file next to the config.
#[test]
fn test_resolve_neon_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harness.toml");
    std::fs::write(&path, PROJECT_CONFIG).unwrap();

    let config = HarnessConfig::from_file(&path).unwrap();
    let connection = config.network("neonDevnet", &MapEnv::new()).unwrap();

    assert_eq!(connection.url.unwrap().as_str(), "https://proxy.devnet.neonlabs.org/solana");
    assert_eq!(connection.timeout, Duration::from_millis(10_000_000));
    assert_eq!(
        connection.accounts,
        AccountsSource::PrivateKeysFile(dir.path().join("neon.private.keys"))
    );
}

/// The in-process network forks from `HARDHAT_FORK`.
#[test]
fn test_resolve_hardhat_fork() {
    let env = MapEnv::new()
        .with("HARDHAT_FORK", "mainnet")
        .with("ETH_NODE_URI_MAINNET", "https://mainnet.example.com");
    let config = project_config();

    let connection = config.network("hardhat", &env).unwrap();
    let forking = connection.forking.unwrap();
    assert_eq!(forking.network, "mainnet");
    assert_eq!(forking.url, "https://mainnet.example.com");
    assert!(forking.block_number.is_none());
    assert_eq!(connection.initial_base_fee_per_gas, Some(0));

    let settings = config.settings(&env);
    assert_eq!(
        settings.external_deployments["localhost"],
        vec![PathBuf::from("deployments/mainnet")]
    );
}

/// Gas reporting follows `REPORT_GAS`.
#[test]
fn test_settings_gas_reporter() {
    let config = project_config();
    assert!(!config.settings(&MapEnv::new()).gas_reporter.enabled);

    let env = MapEnv::new().with("REPORT_GAS", "1").with("TENDERLY_USERNAME", "deployer");
    let settings = config.settings(&env);
    assert!(settings.gas_reporter.enabled);
    assert_eq!(settings.tenderly.username.as_deref(), Some("deployer"));
}
