use std::time::Duration;

use futures::{FutureExt, future::BoxFuture, future::join_all};
use reqwest::Url;
use serde::{Deserialize, Deserializer};
use tracing::{debug, instrument};

use crate::{
    endpoint::{endpoint_url, http_client},
    error::ProviderError,
    ranking_provider::{DestinationRanking, RankingProvider, RankingRequest},
};

pub const SERPAPI_BASE_URL: &str = "https://serpapi.com/";
pub const SERPAPI_DEFAULT_ENGINE: &str = "google_maps";
const SERPAPI_SEARCH_PATH: &str = "search";
const DEFAULT_ZOOM: &str = "14z";

pub struct SerpApiClientParams {
    pub api_key: String,
    pub engine: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl SerpApiClientParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            engine: SERPAPI_DEFAULT_ENGINE.to_owned(),
            base_url: SERPAPI_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SerpApiResult {
    #[serde(default)]
    pub local_results: Vec<LocalResult>,

    #[serde(default)]
    pub directions: Vec<Directions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalResult {
    pub position: Option<u32>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub place_id: Option<String>,
    pub rating: Option<f64>,
    pub gps_coordinates: Option<GpsCoordinates>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Directions {
    #[serde(default, deserialize_with = "text_or_number")]
    pub distance: Option<String>,

    #[serde(default, deserialize_with = "text_or_number")]
    pub duration: Option<String>,

    // Newer payloads put numbers in `distance`/`duration` and the text here.
    pub formatted_distance: Option<String>,
    pub formatted_duration: Option<String>,
}

impl Directions {
    fn distance_text(&self) -> Option<String> {
        self.formatted_distance
            .clone()
            .or_else(|| self.distance.clone())
    }

    fn duration_text(&self) -> Option<String> {
        self.formatted_duration
            .clone()
            .or_else(|| self.duration.clone())
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

struct SearchQuery<'a> {
    q: &'a str,
    ll: Option<&'a str>,
    search_type: Option<&'a str>,
}

/// Google Maps search and directions through SerpApi.
pub struct SerpApiClient {
    params: SerpApiClientParams,
    search_url: Url,
    client: reqwest::Client,
}

impl SerpApiClient {
    pub fn new(params: SerpApiClientParams) -> Result<Self, ProviderError> {
        let search_url = endpoint_url(&params.base_url, SERPAPI_SEARCH_PATH)?;
        let client = http_client(params.timeout)?;

        Ok(Self {
            params,
            search_url,
            client,
        })
    }

    pub async fn search(&self, query: &str) -> Result<SerpApiResult, ProviderError> {
        self.request(&SearchQuery {
            q: query,
            ll: None,
            search_type: None,
        })
        .await
    }

    /// Searches places around a coordinate, `zoom` defaults to `14z`.
    pub async fn search_nearby(
        &self,
        query: &str,
        lat: f64,
        lng: f64,
        zoom: Option<&str>,
    ) -> Result<SerpApiResult, ProviderError> {
        let ll = format!("@{},{},{}", lat, lng, zoom.unwrap_or(DEFAULT_ZOOM));

        self.request(&SearchQuery {
            q: query,
            ll: Some(&ll),
            search_type: None,
        })
        .await
    }

    pub async fn directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<SerpApiResult, ProviderError> {
        let q = format!("{} to {}", origin, destination);

        self.request(&SearchQuery {
            q: &q,
            ll: None,
            search_type: Some("directions"),
        })
        .await
    }

    /// Looks up the travel estimate from `origin` to every destination
    /// concurrently.
    ///
    /// A failed lookup becomes a miss for that destination. Only when every
    /// lookup failed is the provider considered unreachable and the first
    /// error returned.
    #[instrument(skip_all, level = "debug", fields(destinations = destinations.len()))]
    pub async fn rank_destinations(
        &self,
        origin: &str,
        destinations: &[RankingRequest],
    ) -> Result<Vec<DestinationRanking>, ProviderError> {
        if origin.trim().is_empty() {
            return Err(ProviderError::InvalidInput(
                "origin address is empty".to_owned(),
            ));
        }

        if destinations.is_empty() {
            return Ok(vec![]);
        }

        let lookups = destinations
            .iter()
            .map(|destination| self.directions(origin, &destination.address));
        let results = join_all(lookups).await;

        let mut rankings = Vec::with_capacity(destinations.len());
        let mut first_error = None;
        let mut failed = 0;

        for (destination, result) in destinations.iter().zip(results) {
            match result {
                Ok(result) => {
                    let ranking = match result.directions.first() {
                        Some(directions) => DestinationRanking {
                            address: destination.address.clone(),
                            distance: directions.distance_text(),
                            duration: directions.duration_text(),
                        },
                        None => {
                            debug!("SerpApi: no directions to {}", destination.address);
                            DestinationRanking::miss(&destination.address)
                        }
                    };
                    rankings.push(ranking);
                }
                Err(err) => {
                    debug!(
                        "SerpApi: directions lookup to {} failed: {}",
                        destination.address, err
                    );
                    failed += 1;
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                    rankings.push(DestinationRanking::miss(&destination.address));
                }
            }
        }

        if failed == destinations.len() {
            if let Some(err) = first_error {
                return Err(err);
            }
        }

        Ok(rankings)
    }

    async fn request(&self, query: &SearchQuery<'_>) -> Result<SerpApiResult, ProviderError> {
        let mut params = vec![
            ("engine", self.params.engine.as_str()),
            ("api_key", self.params.api_key.as_str()),
            ("q", query.q),
        ];

        if let Some(ll) = query.ll {
            params.push(("ll", ll));
        }

        if let Some(search_type) = query.search_type {
            params.push(("type", search_type));
        }

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(response).await);
        }

        let body = response.text().await?;
        let result: SerpApiResult = serde_json::from_str(&body)?;

        Ok(result)
    }
}

impl RankingProvider for SerpApiClient {
    fn name(&self) -> &'static str {
        "serpapi"
    }

    fn rank<'a>(
        &'a self,
        origin: &'a str,
        destinations: &'a [RankingRequest],
    ) -> BoxFuture<'a, Result<Vec<DestinationRanking>, ProviderError>> {
        self.rank_destinations(origin, destinations).boxed()
    }
}
