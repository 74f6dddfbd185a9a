pub mod directions_link;
mod endpoint;
pub mod error;
pub mod geocoding;
pub mod ranking_provider;
pub mod rapidapi_route;
pub mod serpapi;
pub mod travel_duration;

pub use error::ProviderError;
pub use ranking_provider::{DestinationRanking, RankingProvider, RankingRequest};
