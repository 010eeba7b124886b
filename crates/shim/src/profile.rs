//! Per-network RPC behaviour.

use harness_types::networks::{NEON_DEVNET, NEON_LOCAL};

/// Networks whose nodes cannot snapshot and revert their state.
pub const EMULATED_SNAPSHOT_NETWORKS: [&str; 2] = [NEON_LOCAL, NEON_DEVNET];

/// How requests to a network are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkProfile {
    /// The node implements the full development RPC surface.
    Standard,
    /// `evm_snapshot` and `evm_revert` are answered locally.
    EmulatedSnapshots,
}

impl NetworkProfile {
    /// Look up the profile of the network called `name`.
    pub fn for_network(name: &str) -> Self {
        if EMULATED_SNAPSHOT_NETWORKS.contains(&name) {
            Self::EmulatedSnapshots
        } else {
            Self::Standard
        }
    }

    /// Whether snapshot requests are answered without reaching the node.
    pub const fn emulates_snapshots(self) -> bool {
        matches!(self, Self::EmulatedSnapshots)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::neon_local("neonLocal", NetworkProfile::EmulatedSnapshots)]
    #[case::neon_devnet("neonDevnet", NetworkProfile::EmulatedSnapshots)]
    #[case::hardhat("hardhat", NetworkProfile::Standard)]
    #[case::localhost("localhost", NetworkProfile::Standard)]
    #[case::mainnet("mainnet", NetworkProfile::Standard)]
    #[case::goerli("goerli", NetworkProfile::Standard)]
    #[case::case_sensitive("neonlocal", NetworkProfile::Standard)]
    #[case::empty("", NetworkProfile::Standard)]
    fn test_profile_lookup(#[case] name: &str, #[case] expected: NetworkProfile) {
        assert_eq!(NetworkProfile::for_network(name), expected);
    }

    #[test]
    fn test_emulates_snapshots() {
        assert!(NetworkProfile::EmulatedSnapshots.emulates_snapshots());
        assert!(!NetworkProfile::Standard.emulates_snapshots());
    }
}
