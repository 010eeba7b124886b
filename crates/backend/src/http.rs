//! HTTP JSON-RPC provider.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use alloy_json_rpc::{Id, Request, Response, ResponsePayload};
use async_trait::async_trait;
use harness_traits::Provider;
use harness_types::ProviderError;
use serde_json::Value;
use tracing::{trace, warn};
use url::Url;

/// Connection settings of an [`HttpProvider`].
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Network name, used in logs.
    pub name: String,
    /// JSON-RPC endpoint.
    pub url: Url,
    /// Timeout of a single request.
    pub timeout: Duration,
}

/// Provider sending JSON-RPC 2.0 requests over HTTP.
#[derive(Debug)]
pub struct HttpProvider {
    config: BackendConfig,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl HttpProvider {
    /// Create a provider for the endpoint described by `config`.
    pub fn new(config: BackendConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProviderError::transport)?;
        Ok(Self { config, client, next_id: AtomicU64::new(1) })
    }

    /// Network name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// JSON-RPC endpoint.
    pub const fn url(&self) -> &Url {
        &self.config.url
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn send(&self, method: &str, params: Vec<Value>) -> Result<Value, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = Request::new(method.to_string(), Id::Number(id), params);
        trace!(network = %self.config.name, method, id, "sending request");

        let response = self
            .client
            .post(self.config.url.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(network = %self.config.name, method, error = %e, "request failed");
                ProviderError::transport(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(ProviderError::transport)?;

        let response: Response = match serde_json::from_slice(&body) {
            Ok(response) => response,
            Err(_) if !status.is_success() => {
                warn!(network = %self.config.name, method, %status, "node returned http error");
                return Err(ProviderError::transport(format!("http status {status}")));
            }
            Err(e) => return Err(ProviderError::decode(e)),
        };

        let expected = Id::Number(id);
        if response.id != expected {
            warn!(network = %self.config.name, method, %expected, got = %response.id, "response id mismatch");
            return Err(ProviderError::decode(format!(
                "response id {} does not match request id {expected}",
                response.id
            )));
        }

        match response.payload {
            ResponsePayload::Success(result) => {
                serde_json::from_str(result.get()).map_err(ProviderError::decode)
            }
            ResponsePayload::Failure(error) => {
                trace!(network = %self.config.name, method, code = error.code, "node returned error");
                Err(ProviderError::Rpc { code: error.code, message: error.message.to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
    use serde_json::json;

    use super::*;

    /// Minimal node answering `eth_chainId` and rejecting everything else.
    async fn handle_rpc(Json(request): Json<Value>) -> Json<Value> {
        let id = request["id"].clone();
        match request["method"].as_str() {
            Some("eth_chainId") => Json(json!({ "jsonrpc": "2.0", "id": id, "result": "0xe9ac0ce" })),
            Some("echo_params") => {
                Json(json!({ "jsonrpc": "2.0", "id": id, "result": request["params"].clone() }))
            }
            Some(method) => Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": format!("Method not found: {method}") }
            })),
            None => Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32600, "message": "Invalid Request" }
            })),
        }
    }

    /// Node answering every request with a fixed id.
    async fn wrong_id(Json(_request): Json<Value>) -> Json<Value> {
        Json(json!({ "jsonrpc": "2.0", "id": 9999, "result": "0x1" }))
    }

    async fn unavailable() -> impl IntoResponse {
        (StatusCode::SERVICE_UNAVAILABLE, "Node unhealthy")
    }

    async fn spawn_node(app: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    fn provider(url: Url) -> HttpProvider {
        HttpProvider::new(BackendConfig {
            name: "test".to_string(),
            url,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_success_result() {
        let url = spawn_node(Router::new().route("/", post(handle_rpc))).await;
        let provider = provider(url);

        let result = provider.send("eth_chainId", vec![]).await.unwrap();
        assert_eq!(result, json!("0xe9ac0ce"));
    }

    #[tokio::test]
    async fn test_params_are_sent() {
        let url = spawn_node(Router::new().route("/", post(handle_rpc))).await;
        let provider = provider(url);

        let params = vec![json!("0x742d35cc6634c0532925a3b844bc9e7595f1e3b8"), json!("latest")];
        let result = provider.send("echo_params", params.clone()).await.unwrap();
        assert_eq!(result, Value::Array(params));
    }

    #[tokio::test]
    async fn test_rpc_error() {
        let url = spawn_node(Router::new().route("/", post(handle_rpc))).await;
        let provider = provider(url);

        let err = provider.send("evm_snapshot", vec![]).await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::Rpc { code: -32601, message: "Method not found: evm_snapshot".to_string() }
        );
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = spawn_node(Router::new().route("/", post(unavailable))).await;
        let provider = provider(url);

        let err = provider.send("eth_chainId", vec![]).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport { ref reason } if reason.contains("503")));
    }

    #[tokio::test]
    async fn test_unreachable_node() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = provider(Url::parse(&format!("http://{addr}/")).unwrap());
        let err = provider.send("eth_chainId", vec![]).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_mismatched_response_id() {
        let url = spawn_node(Router::new().route("/", post(wrong_id))).await;
        let provider = provider(url);

        let err = provider.send("eth_chainId", vec![]).await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode { ref reason } if reason.contains("9999")));
    }

    #[tokio::test]
    async fn test_ids_increase() {
        let url = spawn_node(Router::new().route("/", post(handle_rpc))).await;
        let provider = provider(url);

        for _ in 0..3 {
            provider.send("eth_chainId", vec![]).await.unwrap();
        }
        assert_eq!(provider.next_id.load(Ordering::Relaxed), 4);
    }
}
