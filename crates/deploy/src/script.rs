//! Deploy script trait.

use alloy_primitives::Address;
use async_trait::async_trait;
use harness_traits::DiamondDeployer;
use harness_types::DeployError;

use crate::NamedAccounts;

/// Everything a deploy script can reach.
#[derive(Clone, Copy)]
pub struct DeployContext<'a> {
    /// Name of the network being deployed to.
    pub network: &'a str,
    /// Resolved named accounts.
    pub accounts: &'a NamedAccounts,
    /// Facility that assembles diamonds.
    pub diamond: &'a dyn DiamondDeployer,
}

impl std::fmt::Debug for DeployContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployContext")
            .field("network", &self.network)
            .field("accounts", &self.accounts)
            .finish_non_exhaustive()
    }
}

impl DeployContext<'_> {
    /// Address of the named account `name`.
    pub fn named_account(&self, name: &str) -> Result<Address, DeployError> {
        self.accounts
            .get(name)
            .ok_or_else(|| DeployError::MissingNamedAccount { name: name.to_string() })
    }
}

/// A unit of deployment, selected by its tags.
#[async_trait]
pub trait DeployScript: Send + Sync {
    /// Unique script identifier.
    fn id(&self) -> &'static str;

    /// Tags the script is selected by.
    fn tags(&self) -> &'static [&'static str];

    /// Run the script.
    async fn run(&self, ctx: &DeployContext<'_>) -> Result<(), DeployError>;
}
