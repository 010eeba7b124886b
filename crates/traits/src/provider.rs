//! Provider trait for JSON-RPC requests.

use std::sync::Arc;

use async_trait::async_trait;
use harness_types::ProviderError;
use serde_json::Value;

/// A JSON-RPC surface of a blockchain node.
///
/// Transports and the wrappers layered on top of them all expose this single
/// operation, so wrappers compose without the caller noticing.
#[async_trait]
pub trait Provider: Send + Sync + 'static {
    /// Send `method` with positional `params` and return the decoded result.
    async fn send(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Arc<P> {
    async fn send(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        (**self).send(method, params).await
    }
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for Box<P> {
    async fn send(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        (**self).send(method, params).await
    }
}
