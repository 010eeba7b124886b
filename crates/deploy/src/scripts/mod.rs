//! Deploy scripts shipped with the harness.

mod simple_erc20;
pub use simple_erc20::{
    BENEFICIARY_ACCOUNT, DEPLOYER_ACCOUNT, SIMPLE_ERC20_DIAMOND, SIMPLE_ERC20_FACET,
    SIMPLE_ERC20_TAG, SimpleErc20Diamond,
};
