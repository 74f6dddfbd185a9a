use rota_providers::RankingRequest;

use crate::{
    problem::{address::Address, coordinates::Coordinates},
    sequencer::sequence_error::SequenceError,
};

pub(crate) struct Destination<'a> {
    pub address: &'a Address,
    pub coordinates: Coordinates,
}

impl From<&Destination<'_>> for RankingRequest {
    fn from(destination: &Destination<'_>) -> Self {
        RankingRequest {
            address: destination.address.address.clone(),
            lat: destination.coordinates.lat,
            lng: destination.coordinates.lng,
        }
    }
}

/// The geocoded part of a sequencing call: the start and the pooled
/// deliveries and pickups, in input order.
pub(crate) struct SequencingProblem<'a> {
    pub start: &'a Address,
    pub origin: Coordinates,
    pub destinations: Vec<Destination<'a>>,
}

impl<'a> SequencingProblem<'a> {
    /// `Ok(None)` when no destination has coordinates, there is nothing to
    /// sequence.
    pub fn new(
        start: &'a Address,
        deliveries: &'a [Address],
        pickups: &'a [Address],
    ) -> Result<Option<Self>, SequenceError> {
        let destinations: Vec<Destination<'a>> = deliveries
            .iter()
            .chain(pickups)
            .filter_map(|address| {
                address.coordinates.map(|coordinates| Destination {
                    address,
                    coordinates,
                })
            })
            .collect();

        if destinations.is_empty() {
            return Ok(None);
        }

        let origin = start
            .coordinates
            .ok_or_else(|| SequenceError::StartNotGeocoded {
                id: start.id.clone(),
            })?;

        Ok(Some(Self {
            start,
            origin,
            destinations,
        }))
    }

    pub fn ranking_requests(&self) -> Vec<RankingRequest> {
        self.destinations.iter().map(RankingRequest::from).collect()
    }
}
