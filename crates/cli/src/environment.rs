//! Runtime environment of one harness session.

use eyre::{Context, Result};
use harness_backend::{BackendConfig, Disconnected, HttpProvider};
use harness_config::{EnvSource, HarnessConfig, NetworkConnection};
use harness_deploy::{
    AccountsError, DeployContext, DeployRunner, DeploymentPlan, NamedAccounts, PlanRecorder,
    account_addresses,
};
use harness_shim::{SnapshotShim, deterministic_deployment};
use harness_traits::Provider;
use harness_types::DeterministicDeploymentInfo;

/// Environment of one session on one network.
///
/// Owns the network provider wrapped in a [`SnapshotShim`], so snapshot ids
/// are unique for the lifetime of the runtime. Build one per process.
pub struct HarnessRuntime {
    config: HarnessConfig,
    connection: NetworkConnection,
    provider: SnapshotShim<Box<dyn Provider>>,
}

impl std::fmt::Debug for HarnessRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarnessRuntime")
            .field("network", &self.connection.name)
            .field("url", &self.connection.url)
            .field("snapshots", &self.provider.snapshot_count())
            .finish_non_exhaustive()
    }
}

impl HarnessRuntime {
    /// Resolve `network` from `config` and connect to it.
    ///
    /// Networks without an endpoint get a [`Disconnected`] transport, so only
    /// requests the shim answers locally succeed on them.
    pub fn extend(config: HarnessConfig, network: &str, env: &dyn EnvSource) -> Result<Self> {
        let connection = config
            .network(network, env)
            .wrap_err_with(|| format!("failed to resolve network `{network}`"))?;

        let transport: Box<dyn Provider> = match &connection.url {
            Some(url) => {
                debug!(network, url = %url, timeout = ?connection.timeout, "connecting over http");
                Box::new(
                    HttpProvider::new(BackendConfig {
                        name: network.to_string(),
                        url: url.clone(),
                        timeout: connection.timeout,
                    })
                    .wrap_err("failed to build http provider")?,
                )
            }
            None => {
                debug!(network, "network has no url, requests will not reach a node");
                Box::new(Disconnected::new(network))
            }
        };

        Ok(Self::with_transport(config, connection, transport))
    }

    /// Build a runtime over an already constructed transport.
    pub fn with_transport(
        config: HarnessConfig,
        connection: NetworkConnection,
        transport: Box<dyn Provider>,
    ) -> Self {
        let provider = SnapshotShim::new(transport, connection.name.clone());
        Self { config, connection, provider }
    }

    /// Name of the active network.
    pub fn network(&self) -> &str {
        &self.connection.name
    }

    /// Resolved connection of the active network.
    pub const fn connection(&self) -> &NetworkConnection {
        &self.connection
    }

    /// Loaded configuration.
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Provider of the active network, with snapshot emulation applied.
    pub const fn provider(&self) -> &SnapshotShim<Box<dyn Provider>> {
        &self.provider
    }

    /// Deterministic deployment override of the active network.
    pub fn deterministic_deployment(&self) -> Option<DeterministicDeploymentInfo> {
        deterministic_deployment(self.network())
    }

    /// Resolve the configured named accounts on the active network.
    pub async fn named_accounts(&self) -> Result<NamedAccounts, AccountsError> {
        let addresses = account_addresses(&self.connection.accounts, &self.provider).await?;
        NamedAccounts::resolve(&self.config.named_accounts, &addresses)
    }

    /// Run the scripts of `runner` selected by `tags` and return the plan
    /// the external deploy tool has to execute.
    pub async fn deploy(&self, runner: &DeployRunner, tags: &[String]) -> Result<DeploymentPlan> {
        let accounts = self.named_accounts().await.wrap_err("failed to resolve named accounts")?;
        let recorder = PlanRecorder::new(self.network(), self.deterministic_deployment());

        let ctx = DeployContext { network: self.network(), accounts: &accounts, diamond: &recorder };
        let ran = runner.run(&ctx, tags).await.wrap_err("deploy script failed")?;
        info!(network = self.network(), scripts = ?ran, "deploy scripts finished");

        Ok(recorder.into_plan())
    }
}
