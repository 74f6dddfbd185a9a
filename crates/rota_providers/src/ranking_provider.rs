use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::{error::ProviderError, travel_duration::parse_duration_minutes};

/// A destination handed to a ranking provider. The coordinates are carried
/// along for providers that want them, the directions lookup only needs the
/// address text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRequest {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<&RankingRequest> for geo_types::Point {
    fn from(request: &RankingRequest) -> Self {
        geo_types::Point::new(request.lng, request.lat)
    }
}

/// Real-world travel estimate from the origin to one destination. Both fields
/// are empty when the lookup for that destination failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRanking {
    pub address: String,
    pub distance: Option<String>,
    pub duration: Option<String>,
}

impl DestinationRanking {
    pub fn miss(address: impl Into<String>) -> Self {
        DestinationRanking {
            address: address.into(),
            distance: None,
            duration: None,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.distance.is_none() && self.duration.is_none()
    }

    pub fn duration_minutes(&self) -> Option<u64> {
        self.duration.as_deref().and_then(parse_duration_minutes)
    }
}

/// Ranks destinations by travel effort from an origin.
///
/// Implementations return exactly one entry per destination, in request
/// order. An `Err` means the provider as a whole is unavailable; a single
/// failed lookup is reported as [`DestinationRanking::miss`] instead.
pub trait RankingProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn rank<'a>(
        &'a self,
        origin: &'a str,
        destinations: &'a [RankingRequest],
    ) -> BoxFuture<'a, Result<Vec<DestinationRanking>, ProviderError>>;
}
