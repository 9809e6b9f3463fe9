// Shared test helpers: an in-process stand-in for the Sonarr API

#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use serde_json::Value;
use sonarr_sensors::config::SonarrConfig;
use sonarr_sensors::sensor::SensorSettings;
use sonarr_sensors::sonarr_client::SonarrClient;
use sonarr_sensors::units::ByteUnit;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "testkey";

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<String, (StatusCode, Value)>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Serves canned JSON per path and records every request URI (path + query).
/// Bodies with a `records` array are paged by the `pageSize` query parameter (default 10).
pub struct MockSonarr {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockSonarr {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(respond).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, state }
    }

    pub fn set(&self, path: &str, status: StatusCode, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body));
    }

    pub fn ok(&self, path: &str, body: Value) {
        self.set(path, StatusCode::OK, body);
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> SonarrConfig {
        SonarrConfig {
            host: self.addr.ip().to_string(),
            port: self.addr.port(),
            api_key: API_KEY.into(),
            ..SonarrConfig::default()
        }
    }

    pub fn client(&self) -> SonarrClient {
        SonarrClient::with_client(reqwest::Client::new(), &self.config())
    }
}

async fn respond(State(state): State<MockState>, uri: Uri) -> impl IntoResponse {
    state.requests.lock().unwrap().push(uri.to_string());
    let found = state.responses.lock().unwrap().get(uri.path()).cloned();
    let Some((status, mut body)) = found else {
        return (StatusCode::NOT_FOUND, axum::Json(Value::Null));
    };
    if let Some(records) = body.get_mut("records").and_then(Value::as_array_mut) {
        let page_size = query_param(&uri, "pageSize")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(10);
        records.truncate(page_size);
    }
    (status, axum::Json(body))
}

pub fn query_param(uri: &Uri, key: &str) -> Option<String> {
    uri.query()?.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| v.to_string())
    })
}

pub fn settings() -> SensorSettings {
    SensorSettings {
        days: 1,
        unit: ByteUnit::GB,
        include_paths: vec![],
        time_zone: chrono_tz::Tz::UTC,
    }
}
