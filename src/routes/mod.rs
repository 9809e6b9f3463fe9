// Read-only HTTP routes

mod http;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::store::SensorStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: SensorStore,
}

pub fn app(store: SensorStore) -> Router {
    let state = AppState { store };
    Router::new()
        .route("/", get(|| async { "Sonarr sensors are running" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/sensors", get(http::list_sensors_handler)) // GET /api/sensors
        .route("/api/sensors/{kind}", get(http::sensor_handler)) // GET /api/sensors/{kind}
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
