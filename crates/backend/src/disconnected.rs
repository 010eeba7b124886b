//! Provider for networks without an endpoint.

use async_trait::async_trait;
use harness_traits::Provider;
use harness_types::ProviderError;
use serde_json::Value;

/// Provider for a network that has no RPC endpoint configured.
///
/// Every request fails with [`ProviderError::NoUrl`].
#[derive(Debug, Clone)]
pub struct Disconnected {
    network: String,
}

impl Disconnected {
    /// Create a provider for `network`.
    pub fn new(network: impl Into<String>) -> Self {
        Self { network: network.into() }
    }
}

#[async_trait]
impl Provider for Disconnected {
    async fn send(&self, _method: &str, _params: Vec<Value>) -> Result<Value, ProviderError> {
        Err(ProviderError::NoUrl { network: self.network.clone() })
    }
}
