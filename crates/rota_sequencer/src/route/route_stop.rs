use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::address::Address;

/// An address placed in a route. `order` 0 is the start, then 1..N in
/// visiting order across deliveries and pickups alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteStop {
    #[serde(flatten)]
    pub address: Address,
    pub order: usize,
    pub completed: bool,
}

impl RouteStop {
    pub fn new(address: Address, order: usize) -> Self {
        Self {
            address,
            order,
            completed: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.address.id
    }
}
