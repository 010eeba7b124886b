//! Deployment plans for the external deploy tool.

use alloy_primitives::Address;
use async_trait::async_trait;
use harness_traits::DiamondDeployer;
use harness_types::{DeployError, DeterministicDeploymentInfo, DiamondDeployment, DiamondOptions};
use serde::Serialize;
use tokio::sync::Mutex;

/// A diamond the external tool has to deploy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDiamond {
    /// Name the diamond is recorded under.
    pub name: String,
    /// Sender of the deployment transactions.
    pub from: Address,
    /// Facets, in cut order.
    pub facets: Vec<String>,
    /// Whether the tool should log the deployment.
    pub log: bool,
}

/// Everything the deploy scripts asked for on one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentPlan {
    /// Target network.
    pub network: String,
    /// Deterministic deployment override of the network.
    pub deterministic_deployment: Option<DeterministicDeploymentInfo>,
    /// Diamonds to deploy, in request order.
    pub diamonds: Vec<PlannedDiamond>,
}

/// Diamond facility that records requests instead of sending transactions.
///
/// A later request for an already planned name replaces it in place, the way
/// redeploying a diamond upgrades it.
#[derive(Debug)]
pub struct PlanRecorder {
    network: String,
    deterministic_deployment: Option<DeterministicDeploymentInfo>,
    diamonds: Mutex<Vec<PlannedDiamond>>,
}

impl PlanRecorder {
    /// Create a recorder for `network`.
    pub fn new(
        network: impl Into<String>,
        deterministic_deployment: Option<DeterministicDeploymentInfo>,
    ) -> Self {
        Self { network: network.into(), deterministic_deployment, diamonds: Mutex::new(Vec::new()) }
    }

    /// Finish recording.
    pub fn into_plan(self) -> DeploymentPlan {
        DeploymentPlan {
            network: self.network,
            deterministic_deployment: self.deterministic_deployment,
            diamonds: self.diamonds.into_inner(),
        }
    }
}

#[async_trait]
impl DiamondDeployer for PlanRecorder {
    async fn deploy(
        &self,
        name: &str,
        options: DiamondOptions,
    ) -> Result<DiamondDeployment, DeployError> {
        if options.facets.is_empty() {
            return Err(DeployError::Diamond {
                name: name.to_string(),
                reason: "no facets".to_string(),
            });
        }

        let planned = PlannedDiamond {
            name: name.to_string(),
            from: options.from,
            facets: options.facets,
            log: options.log,
        };
        if planned.log {
            info!(network = %self.network, name, from = %planned.from, facets = ?planned.facets, "planned diamond");
        }

        let mut diamonds = self.diamonds.lock().await;
        match diamonds.iter_mut().find(|diamond| diamond.name == name) {
            Some(existing) => *existing = planned.clone(),
            None => diamonds.push(planned.clone()),
        }

        Ok(DiamondDeployment { name: planned.name, address: None, facets: planned.facets })
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;
    use serde_json::json;

    use super::*;

    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const OTHER: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

    fn options(from: Address, facets: &[&str]) -> DiamondOptions {
        DiamondOptions { from, facets: facets.iter().map(|f| f.to_string()).collect(), log: false }
    }

    #[tokio::test]
    async fn test_records_requests() {
        let recorder = PlanRecorder::new("localhost", None);
        let deployment =
            recorder.deploy("SimpleERC20Diamond", options(DEPLOYER, &["SimpleERC20"])).await.unwrap();
        assert_eq!(deployment.name, "SimpleERC20Diamond");
        assert!(deployment.address.is_none());

        let plan = recorder.into_plan();
        assert_eq!(plan.network, "localhost");
        assert_eq!(
            plan.diamonds,
            vec![PlannedDiamond {
                name: "SimpleERC20Diamond".to_string(),
                from: DEPLOYER,
                facets: vec!["SimpleERC20".to_string()],
                log: false,
            }]
        );
    }

    #[tokio::test]
    async fn test_redeploy_replaces_entry() {
        let recorder = PlanRecorder::new("localhost", None);
        recorder.deploy("Token", options(DEPLOYER, &["A"])).await.unwrap();
        recorder.deploy("Registry", options(DEPLOYER, &["R"])).await.unwrap();
        recorder.deploy("Token", options(OTHER, &["A", "B"])).await.unwrap();

        let plan = recorder.into_plan();
        assert_eq!(plan.diamonds.len(), 2);
        assert_eq!(plan.diamonds[0].name, "Token");
        assert_eq!(plan.diamonds[0].from, OTHER);
        assert_eq!(plan.diamonds[0].facets, vec!["A", "B"]);
        assert_eq!(plan.diamonds[1].name, "Registry");
    }

    #[tokio::test]
    async fn test_rejects_empty_facets() {
        let recorder = PlanRecorder::new("localhost", None);
        let err = recorder.deploy("Empty", options(DEPLOYER, &[])).await.unwrap_err();
        assert!(matches!(err, DeployError::Diamond { .. }));
        assert!(recorder.into_plan().diamonds.is_empty());
    }

    #[test]
    fn test_plan_serialization() {
        let plan = PlanRecorder::new(
            "neonDevnet",
            Some(DeterministicDeploymentInfo {
                factory: String::new(),
                deployer: String::new(),
                signed_tx: String::new(),
                funding: "10000000000000000000".to_string(),
            }),
        )
        .into_plan();

        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["network"], "neonDevnet");
        assert_eq!(value["deterministicDeployment"]["funding"], "10000000000000000000");
        assert_eq!(value["diamonds"], json!([]));
    }
}
