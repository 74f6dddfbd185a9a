use std::sync::Arc;

use rota_providers::{geocoding::GeocodingClient, rapidapi_route::RapidApiRouteClient};
use rota_sequencer::{sequencer::Sequencer, snapshot::RouteStore};

pub struct AppState {
    pub sequencer: Sequencer,
    pub store: Arc<dyn RouteStore>,
    pub geocoder: Option<GeocodingClient>,
    pub route_client: Option<RapidApiRouteClient>,
    /// Serializes read-modify-write cycles on the snapshot.
    pub completion_lock: tokio::sync::Mutex<()>,
}
