// Series catalog (GET /api/series)

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub title: String,
    pub episode_file_count: u32,
    pub episode_count: u32,
}
