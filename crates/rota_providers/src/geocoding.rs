use std::time::Duration;

use reqwest::Url;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    endpoint::{endpoint_url, http_client},
    error::ProviderError,
};

pub const GOOGLE_GEOCODING_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/";
const GOOGLE_GEOCODING_PATH: &str = "json";

pub struct GeocodingClientParams {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeocodingClientParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GOOGLE_GEOCODING_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: GeocodeGeometry,
}

#[derive(Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLocation,
}

#[derive(Deserialize)]
struct GeocodeLocation {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedAddress {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
}

impl From<&GeocodedAddress> for geo_types::Point {
    fn from(value: &GeocodedAddress) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

/// Resolves free-text addresses with the Google Geocoding API.
pub struct GeocodingClient {
    params: GeocodingClientParams,
    geocode_url: Url,
    client: reqwest::Client,
}

impl GeocodingClient {
    pub fn new(params: GeocodingClientParams) -> Result<Self, ProviderError> {
        let geocode_url = endpoint_url(&params.base_url, GOOGLE_GEOCODING_PATH)?;
        let client = http_client(params.timeout)?;

        Ok(Self {
            params,
            geocode_url,
            client,
        })
    }

    /// `Ok(None)` when the address does not resolve to anything.
    pub async fn geocode(&self, address: &str) -> Result<Option<GeocodedAddress>, ProviderError> {
        if address.trim().is_empty() {
            return Err(ProviderError::InvalidInput("address is empty".to_owned()));
        }

        let response = self
            .client
            .get(self.geocode_url.clone())
            .query(&[("address", address), ("key", self.params.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(response).await);
        }

        let body = response.text().await?;
        let response: GeocodeResponse = serde_json::from_str(&body)?;

        match response.status.as_str() {
            "OK" => Ok(response
                .results
                .into_iter()
                .next()
                .map(|result| GeocodedAddress {
                    address: address.to_owned(),
                    lat: result.geometry.location.lat,
                    lng: result.geometry.location.lng,
                    formatted_address: result.formatted_address,
                })),
            "ZERO_RESULTS" => {
                debug!("Geocoding: no results for {}", address);
                Ok(None)
            }
            other => Err(ProviderError::Api {
                status: 200,
                message: match response.error_message {
                    Some(message) => format!("{}: {}", other, message),
                    None => other.to_owned(),
                },
            }),
        }
    }
}
