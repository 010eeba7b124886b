#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod accounts;
pub use accounts::{AccountsError, NamedAccounts, account_addresses};

mod plan;
pub use plan::{DeploymentPlan, PlanRecorder, PlannedDiamond};

mod runner;
pub use runner::DeployRunner;

mod script;
pub use script::{DeployContext, DeployScript};

pub mod scripts;
