use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use rota_sequencer::route::optimized_route::OptimizedRoute;

use crate::{error::ApiError, state::AppState};

pub async fn current_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OptimizedRoute>, ApiError> {
    state
        .store
        .load()?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No route has been optimized yet".to_owned()))
}

pub async fn clear_current_handler(
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.completion_lock.lock().await;
    state.store.clear()?;

    Ok(StatusCode::NO_CONTENT)
}
