// Episode-shaped responses: calendar, queue, wanted/missing

use serde::Deserialize;

/// Embedded `series` object; only the title is read.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesRef {
    pub title: String,
}

/// Embedded `episode` object on queue items.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRef {
    pub season_number: u32,
    pub episode_number: u32,
}

/// GET /api/calendar entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEpisode {
    pub air_date: String,
    pub season_number: u32,
    pub episode_number: u32,
    pub series: SeriesRef,
}

/// GET /api/queue entry. `size` and `sizeleft` are byte counts, sent as JSON numbers
/// that may carry a fractional part.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueItem {
    pub series: SeriesRef,
    pub episode: EpisodeRef,
    pub size: f64,
    pub sizeleft: f64,
}

/// First page of GET /api/wanted/missing; only the total is needed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WantedTotal {
    pub total_records: u64,
}

/// GET /api/wanted/missing?pageSize=<total>.
#[derive(Debug, Clone, Deserialize)]
pub struct WantedPage {
    pub records: Vec<WantedRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WantedRecord {
    pub air_date: String,
    pub season_number: u32,
    pub episode_number: u32,
    pub series: SeriesRef,
}
