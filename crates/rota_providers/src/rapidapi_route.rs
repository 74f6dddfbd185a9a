use std::time::Duration;

use reqwest::Url;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    endpoint::{endpoint_url, http_client},
    error::ProviderError,
};

pub const RAPIDAPI_ROUTE_BASE_URL: &str = "https://route-planner2.p.rapidapi.com/";
pub const RAPIDAPI_ROUTE_HOST: &str = "route-planner2.p.rapidapi.com";
const RAPIDAPI_ROUTING_PATH: &str = "routing";

pub struct RapidApiRouteClientParams {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl RapidApiRouteClientParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: RAPIDAPI_ROUTE_BASE_URL.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Deserialize)]
struct RapidApiRouteResponse {
    #[serde(default)]
    routes: Vec<RapidApiRoute>,
}

#[derive(Deserialize)]
struct RapidApiRoute {
    duration: f64,
    distance: f64,
    geometry: String,
}

/// A single driving leg as reported by the route planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailedRoute {
    /// Seconds
    pub duration: f64,
    /// Meters
    pub distance: f64,
    pub encoded_path: String,
}

/// Driving legs between two points from the RapidAPI route planner.
pub struct RapidApiRouteClient {
    params: RapidApiRouteClientParams,
    routing_url: Url,
    client: reqwest::Client,
}

impl RapidApiRouteClient {
    pub fn new(params: RapidApiRouteClientParams) -> Result<Self, ProviderError> {
        let routing_url = endpoint_url(&params.base_url, RAPIDAPI_ROUTING_PATH)?;
        let client = http_client(params.timeout)?;

        Ok(Self {
            params,
            routing_url,
            client,
        })
    }

    /// Fetches the driving leg from `from` to `to`. `Ok(None)` when the
    /// planner found no route.
    pub async fn fetch_route(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
    ) -> Result<Option<DetailedRoute>, ProviderError> {
        let waypoints = format!("{},{}|{},{}", from.y(), from.x(), to.y(), to.x());

        let response = self
            .client
            .get(self.routing_url.clone())
            .query(&[("waypoints", waypoints.as_str()), ("mode", "drive")])
            .header("X-RapidAPI-Key", &self.params.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_ROUTE_HOST)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::from_response(response).await);
        }

        let body = response.text().await?;
        let response: RapidApiRouteResponse = serde_json::from_str(&body)?;

        let Some(route) = response.routes.into_iter().next() else {
            debug!("RapidApi: no route for waypoints {}", waypoints);
            return Ok(None);
        };

        Ok(Some(DetailedRoute {
            duration: route.duration,
            distance: route.distance,
            encoded_path: route.geometry,
        }))
    }
}
