//! Requests handed to the external diamond deployment facility.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Options for assembling a diamond from a list of facets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondOptions {
    /// Account sending the deployment transactions.
    pub from: Address,
    /// Facet contract names cut into the diamond, in order.
    pub facets: Vec<String>,
    /// Whether the facility should log the deployment.
    pub log: bool,
}

/// Outcome reported by the diamond facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondDeployment {
    /// Name the deployment is recorded under.
    pub name: String,
    /// Address of the diamond proxy, once known.
    pub address: Option<Address>,
    /// Facets cut into the diamond.
    pub facets: Vec<String>,
}
