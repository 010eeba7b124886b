#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

// Re-export alloy primitives used across the workspace
pub use alloy_primitives::Address;

mod deterministic;
pub use deterministic::DeterministicDeploymentInfo;

mod diamond;
pub use diamond::{DiamondDeployment, DiamondOptions};

mod error;
pub use error::{DeployError, ProviderError};

pub mod methods;
pub mod networks;
