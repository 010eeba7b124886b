#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod deterministic;
pub use deterministic::{EMULATED_DEPLOYMENT_FUNDING, deterministic_deployment};

mod profile;
pub use profile::{EMULATED_SNAPSHOT_NETWORKS, NetworkProfile};

mod shim;
pub use shim::SnapshotShim;
