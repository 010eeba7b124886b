#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod diamond;
pub use diamond::DiamondDeployer;

mod provider;
pub use provider::Provider;
