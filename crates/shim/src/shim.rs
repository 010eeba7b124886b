//! Provider wrapper that emulates snapshots on networks lacking them.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use harness_traits::Provider;
use harness_types::{
    ProviderError,
    methods::{EVM_REVERT, EVM_SNAPSHOT},
};
use serde_json::Value;
use tracing::debug;

use crate::NetworkProfile;

/// Wrapper that answers `evm_snapshot` and `evm_revert` locally.
///
/// On networks with [`NetworkProfile::EmulatedSnapshots`] a snapshot request
/// returns the next value of a counter owned by this wrapper and a revert
/// request always reports success. No state is captured or restored: callers
/// such as test suites get the responses they expect but isolation between
/// snapshots is not real. Every other request, and every request on other
/// networks, goes to the wrapped provider unchanged, errors included.
///
/// Build one wrapper per session; ids are unique per wrapper.
#[derive(Debug)]
pub struct SnapshotShim<P> {
    inner: P,
    network: String,
    /// Last snapshot id handed out.
    snapshots: AtomicU64,
}

impl<P: Provider> SnapshotShim<P> {
    /// Wrap `inner`, which talks to the network called `network`.
    pub fn new(inner: P, network: impl Into<String>) -> Self {
        let network = network.into();
        debug!(
            network = %network,
            profile = ?NetworkProfile::for_network(&network),
            "wrapping provider with snapshot shim"
        );
        Self { inner, network, snapshots: AtomicU64::new(0) }
    }

    /// Name of the network requests are sent to.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Returns a reference to the wrapped provider.
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of snapshots handed out so far.
    pub fn snapshot_count(&self) -> u64 {
        self.snapshots.load(Ordering::Relaxed)
    }

    /// Produce a local response for `method`, or `None` to forward it.
    fn intercept(&self, method: &str) -> Option<Value> {
        match (NetworkProfile::for_network(&self.network), method) {
            (NetworkProfile::EmulatedSnapshots, EVM_SNAPSHOT) => {
                let id = self.snapshots.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(network = %self.network, id, "emulated evm_snapshot");
                Some(Value::from(id))
            }
            (NetworkProfile::EmulatedSnapshots, EVM_REVERT) => {
                debug!(network = %self.network, "emulated evm_revert");
                Some(Value::Bool(true))
            }
            _ => None,
        }
    }
}

#[async_trait]
impl<P: Provider> Provider for SnapshotShim<P> {
    async fn send(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        if let Some(response) = self.intercept(method) {
            return Ok(response);
        }
        self.inner.send(method, params).await
    }
}
