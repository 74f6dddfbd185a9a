mod directions;
mod error;
mod geocode;
mod route;
mod routes;
mod schema;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::serve;
use rota_sequencer::{config::load_config, snapshot::FileRouteStore};
use tracing::{Level, info};

use crate::{routes::build_app, state::AppState};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = load_config()?;
    let store = FileRouteStore::new(&config.snapshot_dir)
        .with_context(|| format!("Cannot open snapshot dir {}", config.snapshot_dir.display()))?;

    let state = Arc::new(AppState {
        sequencer: config.build_sequencer()?,
        store: Arc::new(store),
        geocoder: config.geocoding_client()?,
        route_client: config.route_client()?,
        completion_lock: Default::default(),
    });

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    serve(listener, app).await?;

    Ok(())
}
