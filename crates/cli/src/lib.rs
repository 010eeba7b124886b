#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod cli;
pub use cli::{Cli, Command, LogFormat};
// Note: check_config! macro is automatically exported via #[macro_export]

mod commands;
pub use commands::execute;

mod environment;
pub use environment::HarnessRuntime;

mod logging;
pub use logging::{init_tracing, log_config_summary};

// Re-export for convenience
pub use clap;
pub use eyre;
