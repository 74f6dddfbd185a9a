use std::sync::Arc;

use axum::{Json, extract::State};
use rota_providers::{ProviderError, geocoding::GeocodedAddress};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct GeocodeBody {
    address: String,
}

pub async fn geocode_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<GeocodeBody>,
) -> Result<Json<GeocodedAddress>, ApiError> {
    let geocoder = state.geocoder.as_ref().ok_or(ProviderError::Disabled)?;

    geocoder
        .geocode(&body.address)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Address not found: {}", body.address)))
}
