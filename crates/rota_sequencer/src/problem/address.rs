use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::coordinates::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AddressRole {
    Start,
    Delivery,
    Pickup,
}

/// A stop entered by the user. `coordinates` stays empty until the address
/// is geocoded; addresses without coordinates are left out of sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Address {
    pub id: String,
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    #[serde(rename = "type")]
    pub role: AddressRole,
}

impl Address {
    pub fn new(id: impl Into<String>, address: impl Into<String>, role: AddressRole) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            coordinates: None,
            role,
        }
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn is_geocoded(&self) -> bool {
        self.coordinates.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_json_shape() {
        let address = Address::new("a1", "Rua Augusta, 100", AddressRole::Pickup)
            .with_coordinates(Coordinates::new(-23.55, -46.65));

        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "a1",
                "address": "Rua Augusta, 100",
                "coordinates": { "lat": -23.55, "lng": -46.65 },
                "type": "pickup"
            })
        );
    }

    #[test]
    fn test_missing_coordinates_deserialize_as_none() {
        let address: Address = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "address": "Somewhere",
            "type": "delivery"
        }))
        .unwrap();

        assert!(!address.is_geocoded());
        assert_eq!(address.role, AddressRole::Delivery);
    }
}
