use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use rota_sequencer::{route::optimized_route::OptimizedRoute, snapshot::mark_completed};

use crate::{error::ApiError, state::AppState};

pub async fn complete_stop_handler(
    State(state): State<Arc<AppState>>,
    Path(stop_id): Path<String>,
) -> Result<Json<OptimizedRoute>, ApiError> {
    let _guard = state.completion_lock.lock().await;

    mark_completed(state.store.as_ref(), &stop_id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No route has been optimized yet".to_owned()))
}
