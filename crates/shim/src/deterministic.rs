//! Deterministic deployment overrides.

use harness_types::DeterministicDeploymentInfo;

use crate::NetworkProfile;

/// Wei sent to the (empty) deployer on networks with emulated snapshots.
pub const EMULATED_DEPLOYMENT_FUNDING: &str = "10000000000000000000";

/// Deterministic deployment parameters to use on `network`.
///
/// Networks with emulated snapshots cannot use the default factory, so they
/// get an override with empty factory, deployer and transaction fields. Every
/// other network returns `None` and keeps the deploy tool's defaults.
pub fn deterministic_deployment(network: &str) -> Option<DeterministicDeploymentInfo> {
    NetworkProfile::for_network(network).emulates_snapshots().then(|| DeterministicDeploymentInfo {
        factory: String::new(),
        deployer: String::new(),
        signed_tx: String::new(),
        funding: EMULATED_DEPLOYMENT_FUNDING.to_string(),
    })
}
