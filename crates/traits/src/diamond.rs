//! Diamond deployment facility.

use async_trait::async_trait;
use harness_types::{DeployError, DiamondDeployment, DiamondOptions};

/// External facility that assembles a diamond proxy from facets.
///
/// The harness never builds the proxy itself; deploy scripts describe the
/// diamond and hand it to an implementation of this trait.
#[async_trait]
pub trait DiamondDeployer: Send + Sync {
    /// Deploy (or upgrade) the diamond recorded under `name`.
    async fn deploy(
        &self,
        name: &str,
        options: DiamondOptions,
    ) -> Result<DiamondDeployment, DeployError>;
}
