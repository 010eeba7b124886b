//! Command execution.

use eyre::{Context, Result};
use harness_config::{EnvSource, HarnessConfig};
use harness_deploy::DeployRunner;
use harness_traits::Provider;
use serde_json::Value;

use crate::{Cli, Command, HarnessRuntime};

/// Run the command selected by `cli` and return its output.
pub async fn execute(cli: &Cli, config: HarnessConfig, env: &dyn EnvSource) -> Result<String> {
    match cli.command.clone().unwrap_or(Command::Networks) {
        Command::Networks => Ok(config.network_names().collect::<Vec<_>>().join("\n")),
        Command::Settings => to_json(&config.settings(env)),
        Command::Accounts => {
            let runtime = HarnessRuntime::extend(config, &cli.network, env)?;
            let accounts =
                runtime.named_accounts().await.wrap_err("failed to resolve named accounts")?;
            to_json(&accounts)
        }
        Command::Send { method, params } => {
            let params: Vec<Value> =
                serde_json::from_str(&params).wrap_err("params must be a JSON array")?;
            let runtime = HarnessRuntime::extend(config, &cli.network, env)?;
            let result = runtime
                .provider()
                .send(&method, params)
                .await
                .wrap_err_with(|| format!("`{method}` failed on {}", runtime.network()))?;
            to_json(&result)
        }
        Command::Deploy { tags } => {
            let runtime = HarnessRuntime::extend(config, &cli.network, env)?;
            let plan = runtime.deploy(&DeployRunner::with_default_scripts(), &tags).await?;
            to_json(&plan)
        }
        Command::DeterministicDeployment => {
            let runtime = HarnessRuntime::extend(config, &cli.network, env)?;
            to_json(&runtime.deterministic_deployment())
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).wrap_err("failed to serialize output")
}
