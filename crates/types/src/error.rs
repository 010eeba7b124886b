//! Error types shared between the harness crates.

use derive_more::{Display, Error, From};

/// Error returned by a JSON-RPC provider.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ProviderError {
    /// The request never produced a JSON-RPC response.
    #[display("transport error: {reason}")]
    Transport {
        /// Underlying failure.
        reason: String,
    },
    /// The node answered with a JSON-RPC error object.
    #[display("rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message reported by the node.
        message: String,
    },
    /// The response body could not be decoded.
    #[display("failed to decode response: {reason}")]
    Decode {
        /// Decoder failure.
        reason: String,
    },
    /// The active network has no endpoint to send requests to.
    #[display("network `{network}` has no rpc url")]
    NoUrl {
        /// Network name.
        network: String,
    },
}

impl ProviderError {
    /// Build a transport error from any displayable failure.
    pub fn transport(reason: impl std::fmt::Display) -> Self {
        Self::Transport { reason: reason.to_string() }
    }

    /// Build a decode error from any displayable failure.
    pub fn decode(reason: impl std::fmt::Display) -> Self {
        Self::Decode { reason: reason.to_string() }
    }
}

/// Error raised while running a deploy script.
#[derive(Debug, Display, Error, From)]
pub enum DeployError {
    /// A named account required by the script is not configured.
    #[display("named account `{name}` is not configured")]
    #[from(ignore)]
    MissingNamedAccount {
        /// Account name.
        name: String,
    },
    /// The diamond facility rejected the deployment.
    #[display("diamond deployment `{name}` failed: {reason}")]
    #[from(ignore)]
    Diamond {
        /// Deployment name.
        name: String,
        /// Failure reported by the facility.
        reason: String,
    },
    /// A provider call made by the script failed.
    #[display("{_0}")]
    Provider(ProviderError),
}
