use chrono_tz::Tz;
use serde::Deserialize;

use crate::sensor::SensorKind;
use crate::units::ByteUnit;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub sonarr: SonarrConfig,
    #[serde(default)]
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Connection and per-metric settings for the Sonarr server.
#[derive(Debug, Clone, Deserialize)]
pub struct SonarrConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub api_key: String,
    #[serde(default)]
    pub ssl: bool,
    /// Day-offset for the upcoming calendar window.
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default)]
    pub unit: ByteUnit,
    /// Disk paths to report; empty means all.
    #[serde(default)]
    pub include_paths: Vec<String>,
    /// IANA zone used to decide what "today" is.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default)]
    pub monitored_conditions: Vec<SensorKind>,
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    8989
}

fn default_days() -> u32 {
    1
}

fn default_time_zone() -> String {
    "UTC".into()
}

impl Default for SonarrConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: String::new(),
            ssl: false,
            days: default_days(),
            unit: ByteUnit::default(),
            include_paths: Vec::new(),
            time_zone: default_time_zone(),
            monitored_conditions: Vec::new(),
        }
    }
}

impl SonarrConfig {
    pub fn tz(&self) -> anyhow::Result<Tz> {
        self.time_zone.parse::<Tz>().map_err(|e| {
            anyhow::anyhow!(
                "sonarr.time_zone {:?} is not a valid IANA time zone: {}",
                self.time_zone,
                e
            )
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_scan_interval_secs")]
    pub scan_interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_scan_interval_secs() -> u64 {
    60
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            scan_interval_secs: default_scan_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.sonarr.host.is_empty(),
            "sonarr.host must be non-empty"
        );
        anyhow::ensure!(
            self.sonarr.port > 0,
            "sonarr.port must be between 1 and 65535, got {}",
            self.sonarr.port
        );
        anyhow::ensure!(
            !self.sonarr.api_key.is_empty(),
            "sonarr.api_key must be non-empty"
        );
        self.sonarr.tz()?;
        anyhow::ensure!(
            self.polling.scan_interval_secs > 0,
            "polling.scan_interval_secs must be > 0, got {}",
            self.polling.scan_interval_secs
        );
        anyhow::ensure!(
            self.polling.request_timeout_secs > 0,
            "polling.request_timeout_secs must be > 0, got {}",
            self.polling.request_timeout_secs
        );
        Ok(())
    }
}
