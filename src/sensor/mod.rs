// Sensors: one per metric kind, each owning its settings and last-known state

mod kind;
pub mod projection;

pub use kind::SensorKind;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use reqwest::StatusCode;
use tracing::instrument;

use crate::config::SonarrConfig;
use crate::models::{
    CalendarEpisode, Command, DiskSpace, QueueItem, SensorSnapshot, SensorState, Series,
    WantedPage, WantedTotal,
};
use crate::sonarr_client::{FetchError, Fetched, SonarrClient};
use crate::units::ByteUnit;

/// Per-sensor settings derived from `[sonarr]`.
#[derive(Debug, Clone)]
pub struct SensorSettings {
    pub days: u32,
    pub unit: ByteUnit,
    pub include_paths: Vec<String>,
    pub time_zone: Tz,
}

impl SensorSettings {
    pub fn from_config(config: &SonarrConfig) -> anyhow::Result<Self> {
        Ok(Self {
            days: config.days,
            unit: config.unit,
            include_paths: config.include_paths.clone(),
            time_zone: config.tz()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Updated,
    /// Upstream answered with a non-200 status; previous state kept.
    Skipped(StatusCode),
}

/// Today and today + `days` as calendar dates in `tz`.
pub fn upcoming_window(tz: Tz, days: u32, now: DateTime<Utc>) -> (NaiveDate, NaiveDate) {
    let start = now.with_timezone(&tz).date_naive();
    let end = (now + Duration::days(i64::from(days)))
        .with_timezone(&tz)
        .date_naive();
    (start, end)
}

pub struct Sensor {
    kind: SensorKind,
    settings: SensorSettings,
    state: SensorState,
    last_updated: Option<DateTime<Utc>>,
}

impl Sensor {
    pub fn new(kind: SensorKind, settings: SensorSettings) -> Self {
        Self {
            kind,
            settings,
            state: SensorState::default(),
            last_updated: None,
        }
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn name(&self) -> String {
        self.kind.display_name()
    }

    /// The configured byte unit for diskspace, the kind's default otherwise.
    pub fn unit(&self) -> String {
        match self.kind {
            SensorKind::Diskspace => self.settings.unit.to_string(),
            kind => kind.default_unit().to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }

    pub fn state(&self) -> &SensorState {
        &self.state
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            kind: self.kind,
            name: self.name(),
            unit: self.unit(),
            icon: self.icon(),
            state: self.state.clone(),
            last_updated: self.last_updated,
        }
    }

    /// Fetches and projects this sensor's metric. State is replaced only when every
    /// request returned 200 and parsed; otherwise the previous state stays as is.
    #[instrument(skip(self, client), fields(sensor = %self.kind))]
    pub async fn update(&mut self, client: &SonarrClient) -> Result<PollOutcome, FetchError> {
        let kind = self.kind;
        let fetched = match kind {
            SensorKind::Diskspace => client
                .get_json::<Vec<DiskSpace>>(&client.endpoint(kind, &[]))
                .await?
                .map(|disks| {
                    projection::diskspace(&disks, &self.settings.include_paths, self.settings.unit)
                }),
            SensorKind::Upcoming => {
                let days = self.settings.days;
                let (start, end) = upcoming_window(self.settings.time_zone, days, Utc::now());
                let url = client.endpoint(
                    kind,
                    &[("start", start.to_string()), ("end", end.to_string())],
                );
                client
                    .get_json::<Vec<CalendarEpisode>>(&url)
                    .await?
                    .map(|episodes| projection::upcoming(episodes, start, days))
            }
            SensorKind::Queue => client
                .get_json::<Vec<QueueItem>>(&client.endpoint(kind, &[]))
                .await?
                .map(|items| projection::queue(&items)),
            SensorKind::Wanted => {
                match client
                    .get_json::<WantedTotal>(&client.endpoint(kind, &[]))
                    .await?
                {
                    Fetched::Ok(total) => {
                        let url =
                            client.endpoint(kind, &[("pageSize", total.total_records.to_string())]);
                        client
                            .get_json::<WantedPage>(&url)
                            .await?
                            .map(|page| projection::wanted(&page.records))
                    }
                    Fetched::Status(status) => Fetched::Status(status),
                }
            }
            SensorKind::Series => client
                .get_json::<Vec<Series>>(&client.endpoint(kind, &[]))
                .await?
                .map(|shows| projection::series(&shows)),
            SensorKind::Commands => client
                .get_json::<Vec<Command>>(&client.endpoint(kind, &[]))
                .await?
                .map(|commands| projection::commands(&commands)),
        };

        match fetched {
            Fetched::Ok((value, attributes)) => {
                self.state = SensorState {
                    value: Some(value),
                    attributes,
                };
                self.last_updated = Some(Utc::now());
                Ok(PollOutcome::Updated)
            }
            Fetched::Status(status) => Ok(PollOutcome::Skipped(status)),
        }
    }
}
