//! Network identifiers known to the harness.

/// In-process development network.
pub const HARDHAT: &str = "hardhat";

/// Development node listening on the local machine.
pub const LOCALHOST: &str = "localhost";

/// Neon EVM proxy running on the local machine.
pub const NEON_LOCAL: &str = "neonLocal";

/// Neon EVM public devnet proxy.
pub const NEON_DEVNET: &str = "neonDevnet";
