// Disk space entries (GET /api/diskspace)

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskSpace {
    pub path: String,
    pub free_space: u64,
    pub total_space: u64,
}
