use tracing::{Level, instrument};

use crate::{
    problem::{address::Address, coordinates::Coordinates, kilometers::Kilometers},
    route::optimized_route::OptimizedRoute,
    sequencer::{
        sequence_error::SequenceError,
        sequencing_problem::{Destination, SequencingProblem},
    },
};

/// Sequences the stops without any external provider, see
/// [`nearest_neighbor_route`].
pub fn sequence_locally(
    start: &Address,
    deliveries: &[Address],
    pickups: &[Address],
) -> Result<OptimizedRoute, SequenceError> {
    match SequencingProblem::new(start, deliveries, pickups)? {
        Some(problem) => Ok(nearest_neighbor_route(&problem)),
        None => Ok(OptimizedRoute::empty()),
    }
}

/// Greedy tour: from the start, repeatedly travel to the closest unvisited
/// destination. Ties go to the destination that comes first in the input.
#[instrument(skip_all, level = Level::DEBUG)]
pub(crate) fn nearest_neighbor_route(problem: &SequencingProblem<'_>) -> OptimizedRoute {
    let mut unvisited: Vec<&Destination<'_>> = problem.destinations.iter().collect();
    let mut visits = Vec::with_capacity(unvisited.len());
    let mut current = problem.origin;
    let mut total_distance = Kilometers::ZERO;

    while !unvisited.is_empty() {
        let (nearest_index, nearest_distance) = find_nearest(&current, &unvisited);
        let nearest = unvisited.remove(nearest_index);

        total_distance += nearest_distance;
        current = nearest.coordinates;
        visits.push(nearest.address);
    }

    OptimizedRoute::from_sequence(problem.start, visits, total_distance)
}

fn find_nearest(from: &Coordinates, candidates: &[&Destination<'_>]) -> (usize, Kilometers) {
    let mut nearest_index = 0;
    let mut nearest_distance = Kilometers::new(f64::INFINITY);

    for (index, candidate) in candidates.iter().enumerate() {
        let distance = from.haversine_distance(&candidate.coordinates);
        if distance < nearest_distance {
            nearest_index = index;
            nearest_distance = distance;
        }
    }

    (nearest_index, nearest_distance)
}
