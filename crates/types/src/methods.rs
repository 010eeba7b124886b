//! JSON-RPC method names the harness cares about.

/// Captures the node state and returns a snapshot id.
pub const EVM_SNAPSHOT: &str = "evm_snapshot";

/// Restores the node state captured by a previous `evm_snapshot`.
pub const EVM_REVERT: &str = "evm_revert";

/// Lists the accounts managed by the node.
pub const ETH_ACCOUNTS: &str = "eth_accounts";

/// Returns the chain id of the node.
pub const ETH_CHAIN_ID: &str = "eth_chainId";
