use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    problem::address::Address,
    route::optimized_route::OptimizedRoute,
    sequencer::{SequenceError, Sequencer, sequence_locally},
};

/// Input accepted by the CLI and the API to build a route.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "SequenceRequest")]
pub struct JsonSequenceRequest {
    pub start: Address,

    #[serde(default)]
    pub deliveries: Vec<Address>,

    #[serde(default)]
    pub pickups: Vec<Address>,
}

impl JsonSequenceRequest {
    pub fn destination_count(&self) -> usize {
        self.deliveries.len() + self.pickups.len()
    }

    pub fn geocoded_destination_count(&self) -> usize {
        self.deliveries
            .iter()
            .chain(&self.pickups)
            .filter(|address| address.is_geocoded())
            .count()
    }

    #[instrument(skip_all, level = "debug")]
    pub async fn sequence(&self, sequencer: &Sequencer) -> Result<OptimizedRoute, SequenceError> {
        sequencer
            .sequence(&self.start, &self.deliveries, &self.pickups)
            .await
    }

    pub fn sequence_locally(&self) -> Result<OptimizedRoute, SequenceError> {
        sequence_locally(&self.start, &self.deliveries, &self.pickups)
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::address::AddressRole;

    use super::*;

    #[test]
    fn test_parses_request_without_pickups() {
        let request: JsonSequenceRequest = serde_json::from_value(serde_json::json!({
            "start": { "id": "start", "address": "Depot", "type": "start", "coordinates": { "lat": 0.0, "lng": 0.0 } },
            "deliveries": [
                { "id": "A", "address": "Rua A", "type": "delivery", "coordinates": { "lat": 0.0, "lng": 1.0 } },
                { "id": "B", "address": "Rua B", "type": "delivery" }
            ]
        }))
        .unwrap();

        assert_eq!(request.destination_count(), 2);
        assert_eq!(request.geocoded_destination_count(), 1);
        assert!(request.pickups.is_empty());
        assert_eq!(request.deliveries[1].role, AddressRole::Delivery);
    }

    #[tokio::test]
    async fn test_sequence_with_local_sequencer() {
        let request: JsonSequenceRequest = serde_json::from_value(serde_json::json!({
            "start": { "id": "start", "address": "Depot", "type": "start", "coordinates": { "lat": 0.0, "lng": 0.0 } },
            "deliveries": [
                { "id": "far", "address": "Far", "type": "delivery", "coordinates": { "lat": 0.0, "lng": 2.0 } }
            ],
            "pickups": [
                { "id": "near", "address": "Near", "type": "pickup", "coordinates": { "lat": 0.0, "lng": 1.0 } }
            ]
        }))
        .unwrap();

        let route = request.sequence(&Sequencer::local()).await.unwrap();
        let ids: Vec<&str> = route.stops.iter().map(|stop| stop.id()).collect();
        assert_eq!(ids, vec!["start", "near", "far"]);

        let local = request.sequence_locally().unwrap();
        assert_eq!(local.stops, route.stops);
        assert_eq!(local.total_distance, route.total_distance);
    }
}
