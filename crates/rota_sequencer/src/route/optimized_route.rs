use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    problem::{
        address::{Address, AddressRole},
        coordinates::Coordinates,
        kilometers::Kilometers,
    },
    route::route_stop::RouteStop,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    pub stops: Vec<RouteStop>,
    pub total_distance: Kilometers,
    pub created_at: Timestamp,
}

impl OptimizedRoute {
    pub fn empty() -> Self {
        Self {
            stops: vec![],
            total_distance: Kilometers::ZERO,
            created_at: Timestamp::now(),
        }
    }

    /// Builds a route visiting `start` first and then `visits` in the given
    /// order. The start is always tagged with the start role.
    pub(crate) fn from_sequence<'a>(
        start: &Address,
        visits: impl IntoIterator<Item = &'a Address>,
        total_distance: Kilometers,
    ) -> Self {
        let mut start = start.clone();
        start.role = AddressRole::Start;

        let stops = std::iter::once(start)
            .chain(visits.into_iter().cloned())
            .enumerate()
            .map(|(order, address)| RouteStop::new(address, order))
            .collect();

        Self {
            stops,
            total_distance: total_distance.rounded(),
            created_at: Timestamp::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stop(&self, stop_id: &str) -> Option<&RouteStop> {
        self.stops.iter().find(|stop| stop.id() == stop_id)
    }

    /// Flips the stop to completed. Returns `false` when the stop does not
    /// exist or was already completed.
    pub fn mark_completed(&mut self, stop_id: &str) -> bool {
        match self.stops.iter_mut().find(|stop| stop.id() == stop_id) {
            Some(stop) if !stop.completed => {
                stop.completed = true;
                true
            }
            _ => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.order > 0 && stop.completed)
            .count()
    }

    /// First destination still to be visited.
    pub fn next_stop(&self) -> Option<&RouteStop> {
        self.stops
            .iter()
            .find(|stop| stop.order > 0 && !stop.completed)
    }
}

/// Sum of great-circle hops along `points`, in order.
pub fn path_distance<'a>(points: impl IntoIterator<Item = &'a Coordinates>) -> Kilometers {
    let mut points = points.into_iter();
    let Some(mut previous) = points.next() else {
        return Kilometers::ZERO;
    };

    let mut total = Kilometers::ZERO;
    for point in points {
        total += previous.haversine_distance(point);
        previous = point;
    }

    total
}
