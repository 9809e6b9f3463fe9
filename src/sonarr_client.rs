// Sonarr REST API client via reqwest

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::instrument;

use crate::config::SonarrConfig;
use crate::sensor::SensorKind;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Result of a GET that reached the server: a parsed body, or the non-200 status.
#[derive(Debug)]
pub enum Fetched<T> {
    Ok(T),
    Status(StatusCode),
}

impl<T> Fetched<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Ok(v) => Fetched::Ok(f(v)),
            Fetched::Status(s) => Fetched::Status(s),
        }
    }
}

pub struct SonarrClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SonarrClient {
    pub fn new(config: &SonarrConfig, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, config))
    }

    pub fn with_client(http: Client, config: &SonarrConfig) -> Self {
        let scheme = if config.ssl { "https" } else { "http" };
        Self {
            http,
            base_url: format!("{}://{}:{}/api", scheme, config.host, config.port),
            api_key: config.api_key.clone(),
        }
    }

    /// `<base>/api/<resource>?apikey=<key>` followed by `query` pairs in order.
    pub fn endpoint(&self, kind: SensorKind, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}?apikey={}", self.base_url, kind.resource(), self.api_key);
        for (key, value) in query {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }

    /// GETs `url` and parses a 200 body as `T`. Any other status is returned as
    /// [`Fetched::Status`] without reading the body.
    #[instrument(skip(self, url), fields(url = %redact(url)))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;
        let status = response.status();
        if status != StatusCode::OK {
            return Ok(Fetched::Status(status));
        }
        let body = response.json::<T>().await.map_err(|e| FetchError::Decode {
            url: redact(url),
            source: e.without_url(),
        })?;
        Ok(Fetched::Ok(body))
    }
}

/// Replaces the `apikey` query value so URLs can be logged.
pub fn redact(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("apikey=") {
                "apikey=***"
            } else {
                pair
            }
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}
