//! Runs deploy scripts by tag.

use harness_types::DeployError;

use crate::{DeployContext, DeployScript, scripts::SimpleErc20Diamond};

/// Ordered registry of deploy scripts.
#[derive(Default)]
pub struct DeployRunner {
    scripts: Vec<Box<dyn DeployScript>>,
}

impl std::fmt::Debug for DeployRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.scripts.iter().map(|script| script.id())).finish()
    }
}

impl DeployRunner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with the scripts shipped with the harness.
    pub fn with_default_scripts() -> Self {
        Self::new().register(SimpleErc20Diamond)
    }

    /// Append `script`; scripts run in registration order.
    #[must_use]
    pub fn register(mut self, script: impl DeployScript + 'static) -> Self {
        self.scripts.push(Box::new(script));
        self
    }

    /// Scripts selected by `tags`; every script when `tags` is empty.
    pub fn selected<'a>(
        &'a self,
        tags: &'a [String],
    ) -> impl Iterator<Item = &'a (dyn DeployScript + 'static)> + 'a {
        self.scripts
            .iter()
            .map(Box::as_ref)
            .filter(move |script| {
                tags.is_empty() || script.tags().iter().any(|tag| tags.iter().any(|t| t == tag))
            })
    }

    /// Run the scripts selected by `tags`, stopping at the first failure.
    ///
    /// Returns the ids of the scripts that ran.
    pub async fn run(
        &self,
        ctx: &DeployContext<'_>,
        tags: &[String],
    ) -> Result<Vec<&'static str>, DeployError> {
        let mut ran = Vec::new();
        for script in self.selected(tags) {
            info!(network = ctx.network, script = script.id(), "running deploy script");
            script.run(ctx).await.inspect_err(|e| {
                error!(network = ctx.network, script = script.id(), error = %e, "deploy script failed");
            })?;
            ran.push(script.id());
        }
        if ran.is_empty() {
            warn!(network = ctx.network, ?tags, "no deploy script matches the requested tags");
        }
        Ok(ran)
    }
}
