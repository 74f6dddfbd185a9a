use rota_providers::{ProviderError, RankingProvider};
use tracing::{Level, debug, instrument};

use crate::{
    route::optimized_route::{OptimizedRoute, path_distance},
    sequencer::sequencing_problem::{Destination, SequencingProblem},
};

/// Unknown durations sort after every known one.
fn ranking_key(minutes: Option<u64>) -> (bool, u64) {
    (minutes.is_none(), minutes.unwrap_or_default())
}

/// Orders the destinations by the provider's travel duration from the start.
///
/// `Ok(None)` when the provider had nothing to say. The reported distance
/// is the great-circle length of the resulting sequence, not the provider's
/// road distances.
#[instrument(skip_all, level = Level::DEBUG, fields(provider = provider.name()))]
pub(crate) async fn ranked_route(
    provider: &dyn RankingProvider,
    problem: &SequencingProblem<'_>,
) -> Result<Option<OptimizedRoute>, ProviderError> {
    let requests = problem.ranking_requests();
    let rankings = provider.rank(&problem.start.address, &requests).await?;

    if rankings.is_empty() {
        return Ok(None);
    }

    if rankings.len() != problem.destinations.len() {
        return Err(ProviderError::RankingMismatch {
            expected: problem.destinations.len(),
            actual: rankings.len(),
        });
    }

    let mut ranked: Vec<(Option<u64>, &Destination<'_>)> = rankings
        .iter()
        .zip(&problem.destinations)
        .map(|(ranking, destination)| (ranking.duration_minutes(), destination))
        .collect();

    // Stable, ties stay in provider order.
    ranked.sort_by_key(|(minutes, _)| ranking_key(*minutes));

    let misses = ranked.iter().filter(|(minutes, _)| minutes.is_none()).count();
    if misses > 0 {
        debug!("{} destinations without a travel estimate", misses);
    }

    let total_distance = path_distance(
        std::iter::once(&problem.origin)
            .chain(ranked.iter().map(|(_, destination)| &destination.coordinates)),
    );

    Ok(Some(OptimizedRoute::from_sequence(
        problem.start,
        ranked.iter().map(|(_, destination)| destination.address),
        total_distance,
    )))
}
