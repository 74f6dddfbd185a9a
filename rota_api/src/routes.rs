use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    directions::directions_handler,
    geocode::geocode_handler,
    route::{
        complete_stop::complete_stop_handler,
        current::{clear_current_handler, current_handler},
        optimize::optimize_handler,
    },
    schema::schema_handler,
    state::AppState,
};

pub fn build_app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/routes/optimize", post(optimize_handler))
        .route(
            "/routes/current",
            get(current_handler).delete(clear_current_handler),
        )
        .route(
            "/routes/current/stops/{stop_id}/complete",
            post(complete_stop_handler),
        )
        .route("/geocode", post(geocode_handler))
        .route("/directions", post(directions_handler))
        .route("/schema", get(schema_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_utils {
    use std::sync::Arc;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use rota_sequencer::{sequencer::Sequencer, snapshot::InMemoryRouteStore};
    use tower::ServiceExt;

    use crate::state::AppState;

    use super::build_app;

    pub fn local_state() -> (Arc<AppState>, Arc<InMemoryRouteStore>) {
        let store = Arc::new(InMemoryRouteStore::new());
        let state = Arc::new(AppState {
            sequencer: Sequencer::local(),
            store: store.clone(),
            geocoder: None,
            route_client: None,
            completion_lock: Default::default(),
        });

        (state, store)
    }

    pub async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, bytes.to_vec())
    }

    pub async fn send_json(
        state: Arc<AppState>,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = send(build_app(state), method, uri, body).await;
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        (status, json)
    }

    pub fn sample_request() -> serde_json::Value {
        serde_json::json!({
            "start": { "id": "start", "address": "Depot", "type": "start", "coordinates": { "lat": 0.0, "lng": 0.0 } },
            "deliveries": [
                { "id": "A", "address": "Rua A", "type": "delivery", "coordinates": { "lat": 0.0, "lng": 1.0 } },
                { "id": "B", "address": "Rua B", "type": "delivery", "coordinates": { "lat": 0.0, "lng": 3.0 } }
            ],
            "pickups": [
                { "id": "C", "address": "Rua C", "type": "pickup", "coordinates": { "lat": 0.0, "lng": 2.0 } }
            ]
        })
    }
}
