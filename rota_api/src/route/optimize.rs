use std::sync::Arc;

use axum::{Json, extract::State};
use rota_sequencer::{json::types::JsonSequenceRequest, route::optimized_route::OptimizedRoute};
use tracing::info;

use crate::{error::ApiError, state::AppState};

pub async fn optimize_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonSequenceRequest>,
) -> Result<Json<OptimizedRoute>, ApiError> {
    if body.destination_count() == 0 {
        return Err(ApiError::BadRequest(
            "At least one delivery or pickup is required".to_owned(),
        ));
    }

    let route = body.sequence(&state.sequencer).await?;

    {
        let _guard = state.completion_lock.lock().await;
        state.store.save(&route)?;
    }

    info!(
        "Optimized route with {} stops, {}",
        route.stops.len(),
        route.total_distance
    );

    Ok(Json(route))
}
