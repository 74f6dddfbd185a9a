use std::sync::atomic::{AtomicUsize, Ordering};

use futures::{FutureExt, future::BoxFuture};
use parking_lot::Mutex;
use rota_providers::{DestinationRanking, ProviderError, RankingProvider, RankingRequest};

use crate::{
    problem::{
        address::{Address, AddressRole},
        coordinates::Coordinates,
    },
    route::optimized_route::OptimizedRoute,
    sequencer::sequence_locally,
};

pub fn start_at(lat: f64, lng: f64) -> Address {
    Address::new("start", "Depot", AddressRole::Start).with_coordinates(Coordinates::new(lat, lng))
}

pub fn geocoded(id: &str, role: AddressRole, lat: f64, lng: f64) -> Address {
    Address::new(id, format!("{} address", id), role).with_coordinates(Coordinates::new(lat, lng))
}

pub fn ungeocoded(id: &str, role: AddressRole) -> Address {
    Address::new(id, format!("{} address", id), role)
}

/// Start at (0, 0) with three deliveries along the equator.
pub fn create_test_route() -> OptimizedRoute {
    let deliveries = vec![
        geocoded("A", AddressRole::Delivery, 0.0, 1.0),
        geocoded("B", AddressRole::Delivery, 0.0, 3.0),
        geocoded("C", AddressRole::Pickup, 0.0, 2.0),
    ];

    sequence_locally(&start_at(0.0, 0.0), &deliveries, &[]).unwrap()
}

enum ScriptedOutcome {
    Rankings(Vec<DestinationRanking>),
    Unavailable,
}

pub struct ScriptedRankingProvider {
    outcome: ScriptedOutcome,
    calls: AtomicUsize,
    last_request: Mutex<Vec<String>>,
}

impl ScriptedRankingProvider {
    pub fn rankings(rankings: Vec<DestinationRanking>) -> Self {
        Self::with_outcome(ScriptedOutcome::Rankings(rankings))
    }

    pub fn unavailable() -> Self {
        Self::with_outcome(ScriptedOutcome::Unavailable)
    }

    fn with_outcome(outcome: ScriptedOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Vec<String> {
        self.last_request.lock().clone()
    }
}

impl RankingProvider for ScriptedRankingProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn rank<'a>(
        &'a self,
        _origin: &'a str,
        destinations: &'a [RankingRequest],
    ) -> BoxFuture<'a, Result<Vec<DestinationRanking>, ProviderError>> {
        async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock() = destinations
                .iter()
                .map(|destination| destination.address.clone())
                .collect();

            match &self.outcome {
                ScriptedOutcome::Rankings(rankings) => Ok(rankings.clone()),
                ScriptedOutcome::Unavailable => Err(ProviderError::Api {
                    status: 503,
                    message: "Service Unavailable".to_owned(),
                }),
            }
        }
        .boxed()
    }
}
