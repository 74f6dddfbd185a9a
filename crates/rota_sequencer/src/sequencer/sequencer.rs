use std::sync::Arc;

use rota_providers::RankingProvider;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info, instrument, warn};

use crate::{
    problem::address::Address,
    route::optimized_route::OptimizedRoute,
    sequencer::{
        nearest_neighbor::nearest_neighbor_route, ranked_sequence::ranked_route,
        sequence_error::SequenceError, sequencing_problem::SequencingProblem,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequencerConfig {
    pub external_ranking_enabled: bool,
}

/// Orders stops into a single visiting sequence.
///
/// With external ranking enabled the provider's travel durations decide the
/// order. Whenever the provider is unavailable or has no answer, the route
/// is built with the nearest-neighbor heuristic instead.
pub struct Sequencer {
    config: SequencerConfig,
    ranking_provider: Option<Arc<dyn RankingProvider>>,
}

impl Sequencer {
    pub fn new(config: SequencerConfig, ranking_provider: Option<Arc<dyn RankingProvider>>) -> Self {
        Self {
            config,
            ranking_provider,
        }
    }

    pub fn local() -> Self {
        Self::new(SequencerConfig::default(), None)
    }

    pub fn config(&self) -> SequencerConfig {
        self.config
    }

    fn active_ranking_provider(&self) -> Option<&dyn RankingProvider> {
        if !self.config.external_ranking_enabled {
            return None;
        }

        self.ranking_provider.as_deref()
    }

    /// Produces the visiting order for `start` followed by every geocoded
    /// delivery and pickup.
    ///
    /// Destinations without coordinates are dropped. With no geocoded
    /// destination the route is empty. The only failure is a start without
    /// coordinates while there is something to visit.
    #[instrument(skip_all, level = Level::DEBUG, fields(deliveries = deliveries.len(), pickups = pickups.len()))]
    pub async fn sequence(
        &self,
        start: &Address,
        deliveries: &[Address],
        pickups: &[Address],
    ) -> Result<OptimizedRoute, SequenceError> {
        let Some(problem) = SequencingProblem::new(start, deliveries, pickups)? else {
            debug!("No geocoded destinations, returning an empty route");
            return Ok(OptimizedRoute::empty());
        };

        if let Some(provider) = self.active_ranking_provider() {
            match ranked_route(provider, &problem).await {
                Ok(Some(route)) => {
                    info!(
                        "Route ranked with {}: {} stops, {}",
                        provider.name(),
                        route.stops.len(),
                        route.total_distance
                    );
                    return Ok(route);
                }
                Ok(None) => debug!("{} returned no ranking", provider.name()),
                Err(err) => warn!(
                    "{} unavailable, using nearest neighbor: {}",
                    provider.name(),
                    err
                ),
            }
        }

        let route = nearest_neighbor_route(&problem);
        info!(
            "Route built with nearest neighbor: {} stops, {}",
            route.stops.len(),
            route.total_distance
        );

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use rota_providers::DestinationRanking;

    use crate::{
        problem::{address::AddressRole, kilometers::Kilometers},
        sequencer::sequence_locally,
        test_utils::{ScriptedRankingProvider, geocoded, start_at, ungeocoded},
    };

    use super::*;

    fn enabled(provider: &Arc<ScriptedRankingProvider>) -> Sequencer {
        Sequencer::new(
            SequencerConfig {
                external_ranking_enabled: true,
            },
            Some(Arc::clone(provider) as Arc<dyn RankingProvider>),
        )
    }

    fn stop_ids(route: &OptimizedRoute) -> Vec<&str> {
        route.stops.iter().map(|stop| stop.id()).collect()
    }

    fn ranking(address: &str, duration: Option<&str>) -> DestinationRanking {
        DestinationRanking {
            address: address.to_owned(),
            distance: duration.map(|_| "1 km".to_owned()),
            duration: duration.map(str::to_owned),
        }
    }

    fn line_of_stops() -> (Address, Vec<Address>, Vec<Address>) {
        let start = start_at(0.0, 0.0);
        let deliveries = vec![
            geocoded("A", AddressRole::Delivery, 0.0, 1.0),
            geocoded("B", AddressRole::Delivery, 0.0, 3.0),
        ];
        let pickups = vec![geocoded("C", AddressRole::Pickup, 0.0, 2.0)];

        (start, deliveries, pickups)
    }

    #[tokio::test]
    async fn test_orders_by_provider_duration() {
        let (start, deliveries, pickups) = line_of_stops();
        let provider = Arc::new(ScriptedRankingProvider::rankings(vec![
            ranking("A", Some("25 min")),
            ranking("B", Some("4 min")),
            ranking("C", Some("12 min")),
        ]));

        let route = enabled(&provider)
            .sequence(&start, &deliveries, &pickups)
            .await
            .unwrap();

        assert_eq!(stop_ids(&route), vec!["start", "B", "C", "A"]);
        assert_eq!(provider.calls(), 1);
        for (index, stop) in route.stops.iter().enumerate() {
            assert_eq!(stop.order, index);
            assert!(!stop.completed);
        }

        let a = deliveries[0].coordinates.unwrap();
        let b = deliveries[1].coordinates.unwrap();
        let c = pickups[0].coordinates.unwrap();
        let expected = (start.coordinates.unwrap().haversine_distance(&b)
            + b.haversine_distance(&c)
            + c.haversine_distance(&a))
        .rounded();
        assert_eq!(route.total_distance, expected);
    }

    #[tokio::test]
    async fn test_provider_receives_only_geocoded_destinations() {
        let start = start_at(0.0, 0.0);
        let deliveries = vec![
            ungeocoded("lost", AddressRole::Delivery),
            geocoded("A", AddressRole::Delivery, 0.0, 1.0),
        ];
        let provider = Arc::new(ScriptedRankingProvider::rankings(vec![ranking(
            "A",
            Some("3 min"),
        )]));

        let route = enabled(&provider)
            .sequence(&start, &deliveries, &[])
            .await
            .unwrap();

        assert_eq!(provider.last_request(), vec!["A address".to_owned()]);
        assert_eq!(stop_ids(&route), vec!["start", "A"]);
    }

    #[tokio::test]
    async fn test_unparsable_durations_sort_last_in_provider_order() {
        let (start, deliveries, pickups) = line_of_stops();
        let provider = Arc::new(ScriptedRankingProvider::rankings(vec![
            ranking("A", None),
            ranking("B", Some("soon")),
            ranking("C", Some("9 min")),
        ]));

        let route = enabled(&provider)
            .sequence(&start, &deliveries, &pickups)
            .await
            .unwrap();

        assert_eq!(stop_ids(&route), vec!["start", "C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_unavailable_provider_falls_back() {
        let (start, deliveries, pickups) = line_of_stops();
        let provider = Arc::new(ScriptedRankingProvider::unavailable());

        let route = enabled(&provider)
            .sequence(&start, &deliveries, &pickups)
            .await
            .unwrap();
        let local = sequence_locally(&start, &deliveries, &pickups).unwrap();

        assert_eq!(provider.calls(), 1);
        assert_eq!(stop_ids(&route), vec!["start", "A", "C", "B"]);
        assert_eq!(stop_ids(&route), stop_ids(&local));
        assert_eq!(route.total_distance, local.total_distance);
    }

    #[tokio::test]
    async fn test_empty_ranking_falls_back() {
        let (start, deliveries, pickups) = line_of_stops();
        let provider = Arc::new(ScriptedRankingProvider::rankings(vec![]));

        let route = enabled(&provider)
            .sequence(&start, &deliveries, &pickups)
            .await
            .unwrap();

        assert_eq!(stop_ids(&route), vec!["start", "A", "C", "B"]);
    }

    #[tokio::test]
    async fn test_mismatched_ranking_falls_back() {
        let (start, deliveries, pickups) = line_of_stops();
        let provider = Arc::new(ScriptedRankingProvider::rankings(vec![ranking(
            "B",
            Some("1 min"),
        )]));

        let route = enabled(&provider)
            .sequence(&start, &deliveries, &pickups)
            .await
            .unwrap();

        assert_eq!(stop_ids(&route), vec!["start", "A", "C", "B"]);
    }

    #[tokio::test]
    async fn test_disabled_ranking_never_calls_provider() {
        let (start, deliveries, pickups) = line_of_stops();
        let provider = Arc::new(ScriptedRankingProvider::rankings(vec![
            ranking("A", Some("25 min")),
            ranking("B", Some("4 min")),
            ranking("C", Some("12 min")),
        ]));
        let sequencer = Sequencer::new(
            SequencerConfig {
                external_ranking_enabled: false,
            },
            Some(Arc::clone(&provider) as Arc<dyn RankingProvider>),
        );

        let route = sequencer
            .sequence(&start, &deliveries, &pickups)
            .await
            .unwrap();

        assert_eq!(provider.calls(), 0);
        assert_eq!(stop_ids(&route), vec!["start", "A", "C", "B"]);
    }

    #[tokio::test]
    async fn test_nothing_to_sequence_skips_provider() {
        let start = start_at(0.0, 0.0);
        let provider = Arc::new(ScriptedRankingProvider::unavailable());

        let route = enabled(&provider)
            .sequence(&start, &[ungeocoded("lost", AddressRole::Delivery)], &[])
            .await
            .unwrap();

        assert!(route.is_empty());
        assert_eq!(route.total_distance, Kilometers::ZERO);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_start_without_coordinates_is_an_error() {
        let start = ungeocoded("start", AddressRole::Start);
        let deliveries = vec![geocoded("A", AddressRole::Delivery, 0.0, 1.0)];

        let result = Sequencer::local().sequence(&start, &deliveries, &[]).await;

        assert!(matches!(result, Err(SequenceError::StartNotGeocoded { .. })));
    }
}
