//! SimpleERC20 token deployed as a diamond.

use async_trait::async_trait;
use harness_types::{DeployError, DiamondOptions};

use crate::{DeployContext, DeployScript};

/// Tag selecting the SimpleERC20 deployment.
pub const SIMPLE_ERC20_TAG: &str = "SimpleERC20";
/// Name the diamond is recorded under.
pub const SIMPLE_ERC20_DIAMOND: &str = "SimpleERC20Diamond";
/// Facet holding the token logic.
pub const SIMPLE_ERC20_FACET: &str = "SimpleERC20";
/// Account sending the deployment.
pub const DEPLOYER_ACCOUNT: &str = "deployer";
/// Account receiving the initial supply.
pub const BENEFICIARY_ACCOUNT: &str = "simpleERC20Beneficiary";

/// Deploys `SimpleERC20Diamond` with the `SimpleERC20` facet from `deployer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleErc20Diamond;

#[async_trait]
impl DeployScript for SimpleErc20Diamond {
    fn id(&self) -> &'static str {
        "001_deploy_simple_erc20"
    }

    fn tags(&self) -> &'static [&'static str] {
        &[SIMPLE_ERC20_TAG]
    }

    async fn run(&self, ctx: &DeployContext<'_>) -> Result<(), DeployError> {
        let deployer = ctx.named_account(DEPLOYER_ACCOUNT)?;
        let beneficiary = ctx.named_account(BENEFICIARY_ACCOUNT)?;
        debug!(network = ctx.network, %deployer, %beneficiary, "deploying simple erc20 diamond");

        let deployment = ctx
            .diamond
            .deploy(
                SIMPLE_ERC20_DIAMOND,
                DiamondOptions {
                    from: deployer,
                    facets: vec![SIMPLE_ERC20_FACET.to_string()],
                    log: true,
                },
            )
            .await?;

        info!(
            name = %deployment.name,
            address = ?deployment.address,
            facets = ?deployment.facets,
            "diamond deployed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use alloy_primitives::{Address, address};
    use harness_traits::DiamondDeployer;
    use harness_types::DiamondDeployment;
    use tokio::sync::Mutex;

    use super::*;
    use crate::NamedAccounts;

    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    /// Diamond facility recording every request.
    #[derive(Default)]
    struct RecordingDiamond {
        requests: Mutex<Vec<(String, DiamondOptions)>>,
    }

    #[async_trait]
    impl DiamondDeployer for RecordingDiamond {
        async fn deploy(
            &self,
            name: &str,
            options: DiamondOptions,
        ) -> Result<DiamondDeployment, DeployError> {
            let facets = options.facets.clone();
            self.requests.lock().await.push((name.to_string(), options));
            Ok(DiamondDeployment { name: name.to_string(), address: None, facets })
        }
    }

    /// Diamond facility rejecting every request.
    struct RejectingDiamond;

    #[async_trait]
    impl DiamondDeployer for RejectingDiamond {
        async fn deploy(
            &self,
            name: &str,
            _options: DiamondOptions,
        ) -> Result<DiamondDeployment, DeployError> {
            Err(DeployError::Diamond { name: name.to_string(), reason: "out of gas".to_string() })
        }
    }

    fn accounts() -> NamedAccounts {
        let named = BTreeMap::from([
            (DEPLOYER_ACCOUNT.to_string(), 0),
            (BENEFICIARY_ACCOUNT.to_string(), 0),
        ]);
        NamedAccounts::resolve(&named, &[DEPLOYER]).unwrap()
    }

    #[tokio::test]
    async fn test_requests_diamond() {
        let diamond = RecordingDiamond::default();
        let accounts = accounts();
        let ctx = DeployContext { network: "localhost", accounts: &accounts, diamond: &diamond };

        SimpleErc20Diamond.run(&ctx).await.unwrap();

        let requests = diamond.requests.lock().await;
        assert_eq!(
            *requests,
            vec![(
                "SimpleERC20Diamond".to_string(),
                DiamondOptions {
                    from: DEPLOYER,
                    facets: vec!["SimpleERC20".to_string()],
                    log: true,
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_missing_beneficiary() {
        let diamond = RecordingDiamond::default();
        let named = BTreeMap::from([(DEPLOYER_ACCOUNT.to_string(), 0)]);
        let accounts = NamedAccounts::resolve(&named, &[DEPLOYER]).unwrap();
        let ctx = DeployContext { network: "localhost", accounts: &accounts, diamond: &diamond };

        let err = SimpleErc20Diamond.run(&ctx).await.unwrap_err();
        assert!(
            matches!(err, DeployError::MissingNamedAccount { ref name } if name == BENEFICIARY_ACCOUNT)
        );
        assert!(diamond.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_diamond_failure_propagates() {
        let accounts = accounts();
        let ctx = DeployContext { network: "neonDevnet", accounts: &accounts, diamond: &RejectingDiamond };

        let err = SimpleErc20Diamond.run(&ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "diamond deployment `SimpleERC20Diamond` failed: out of gas");
    }

    #[test]
    fn test_tags() {
        assert_eq!(SimpleErc20Diamond.tags(), &["SimpleERC20"]);
    }
}
