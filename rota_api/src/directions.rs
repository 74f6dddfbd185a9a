use std::sync::Arc;

use axum::{Json, extract::State};
use rota_providers::{directions_link::google_maps_directions_url, rapidapi_route::DetailedRoute};
use rota_sequencer::problem::coordinates::Coordinates;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct DirectionsEndpoint {
    address: String,
    coordinates: Option<Coordinates>,
}

#[derive(Deserialize)]
pub struct DirectionsBody {
    origin: DirectionsEndpoint,
    destination: DirectionsEndpoint,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsResponse {
    maps_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detailed_route: Option<DetailedRoute>,
}

/// Google Maps hand-off link, plus the driving leg when the route planner
/// is configured and both ends carry coordinates.
pub async fn directions_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DirectionsBody>,
) -> Result<Json<DirectionsResponse>, ApiError> {
    if body.origin.address.trim().is_empty() || body.destination.address.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Origin and destination are required".to_owned(),
        ));
    }

    let maps_url = google_maps_directions_url(&body.origin.address, &body.destination.address);

    let detailed_route = match (
        &state.route_client,
        body.origin.coordinates,
        body.destination.coordinates,
    ) {
        (Some(client), Some(from), Some(to)) => {
            match client
                .fetch_route(geo_types::Point::from(from), geo_types::Point::from(to))
                .await
            {
                Ok(route) => route,
                Err(err) => {
                    warn!("Detailed route unavailable: {}", err);
                    None
                }
            }
        }
        _ => None,
    };

    Ok(Json(DirectionsResponse {
        maps_url,
        detailed_route,
    }))
}
