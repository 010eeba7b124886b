//! Deterministic deployment parameters.

use serde::{Deserialize, Serialize};

/// Factory, deployer and pre-signed transaction used to deploy contracts at
/// the same address on every network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeterministicDeploymentInfo {
    /// Address of the deployment factory.
    pub factory: String,
    /// Account that deploys the factory.
    pub deployer: String,
    /// Raw signed transaction that deploys the factory.
    pub signed_tx: String,
    /// Amount of wei (decimal) sent to the deployer before the factory deployment.
    pub funding: String,
}
