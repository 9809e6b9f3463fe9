// GET handlers: version, sensors

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::AppState;
use crate::models::SensorSnapshot;
use crate::sensor::SensorKind;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/sensors — every configured sensor's latest snapshot.
pub(super) async fn list_sensors_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.all().await)
}

/// GET /api/sensors/{kind} — 404 for unknown or unconfigured kinds.
pub(super) async fn sensor_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<SensorSnapshot>, StatusCode> {
    let kind: SensorKind = kind.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    state
        .store
        .get(kind)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
