//! Settings resolved from the environment.

use std::{collections::BTreeMap, path::PathBuf};

use harness_types::networks::{HARDHAT, LOCALHOST};
use serde::Serialize;

use crate::{
    EnvSource, HarnessConfig,
    env::{COINMARKETCAP_API_KEY, HARDHAT_FORK, REPORT_GAS, TENDERLY_USERNAME},
};

/// Environment-dependent settings consumed by the external tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Gas reporter.
    pub gas_reporter: GasReporter,
    /// Extra deployment directories, by network.
    pub external_deployments: BTreeMap<String, Vec<PathBuf>>,
    /// Tenderly account.
    pub tenderly: Tenderly,
    /// Network the in-process network forks from.
    pub fork: Option<String>,
}

/// Gas reporter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasReporter {
    /// Whether gas is reported.
    pub enabled: bool,
    /// Fiat currency.
    pub currency: String,
    /// Gas price in gwei.
    pub gas_price: u64,
    /// Price lookup API key.
    pub coinmarketcap: Option<String>,
    /// Maximum method gas difference shown.
    pub max_method_diff: u32,
}

/// Tenderly account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tenderly {
    /// Project slug.
    pub project: String,
    /// Account name.
    pub username: Option<String>,
}

impl HarnessConfig {
    /// Resolve the environment-dependent settings.
    ///
    /// When `HARDHAT_FORK` names a network, the in-process and `localhost`
    /// networks read deployments from that network's artifact directory,
    /// located under the config root.
    pub fn settings(&self, env: &dyn EnvSource) -> Settings {
        let fork = env.non_empty(HARDHAT_FORK);

        let mut external_deployments = BTreeMap::new();
        if let Some(fork) = &fork {
            let dir = self.deployments_dir().join(fork);
            for network in [HARDHAT, LOCALHOST] {
                external_deployments.insert(network.to_string(), vec![dir.clone()]);
            }
        }

        Settings {
            gas_reporter: GasReporter {
                enabled: env.non_empty(REPORT_GAS).is_some(),
                currency: self.gas_reporter.currency.clone(),
                gas_price: self.gas_reporter.gas_price,
                coinmarketcap: env.non_empty(COINMARKETCAP_API_KEY),
                max_method_diff: self.gas_reporter.max_method_diff,
            },
            external_deployments,
            tenderly: Tenderly {
                project: self.tenderly.project.clone(),
                username: env.var(TENDERLY_USERNAME),
            },
            fork,
        }
    }
}
