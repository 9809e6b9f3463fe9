// Metric kinds and their fixed presentation metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six supported metrics. Serializes to its config name (e.g. "diskspace").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Diskspace,
    Queue,
    Upcoming,
    Wanted,
    Series,
    Commands,
}

impl SensorKind {
    pub const ALL: [SensorKind; 6] = [
        SensorKind::Diskspace,
        SensorKind::Queue,
        SensorKind::Upcoming,
        SensorKind::Wanted,
        SensorKind::Series,
        SensorKind::Commands,
    ];

    /// Config / URL name.
    pub fn name(self) -> &'static str {
        match self {
            SensorKind::Diskspace => "diskspace",
            SensorKind::Queue => "queue",
            SensorKind::Upcoming => "upcoming",
            SensorKind::Wanted => "wanted",
            SensorKind::Series => "series",
            SensorKind::Commands => "commands",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SensorKind::Diskspace => "Disk Space",
            SensorKind::Queue => "Queue",
            SensorKind::Upcoming => "Upcoming",
            SensorKind::Wanted => "Wanted",
            SensorKind::Series => "Series",
            SensorKind::Commands => "Commands",
        }
    }

    /// Full display name, e.g. "Sonarr Disk Space".
    pub fn display_name(self) -> String {
        format!("Sonarr {}", self.label())
    }

    /// Unit of measurement; diskspace is overridden by the configured byte unit.
    pub fn default_unit(self) -> &'static str {
        match self {
            SensorKind::Diskspace => "GB",
            SensorKind::Queue | SensorKind::Upcoming | SensorKind::Wanted => "Episodes",
            SensorKind::Series => "Shows",
            SensorKind::Commands => "Commands",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SensorKind::Diskspace => "mdi:harddisk",
            SensorKind::Queue => "mdi:download",
            SensorKind::Upcoming | SensorKind::Wanted | SensorKind::Series => "mdi:television",
            SensorKind::Commands => "mdi:code-braces",
        }
    }

    /// Path under `/api/` on the upstream server.
    pub fn resource(self) -> &'static str {
        match self {
            SensorKind::Diskspace => "diskspace",
            SensorKind::Queue => "queue",
            SensorKind::Upcoming => "calendar",
            SensorKind::Wanted => "wanted/missing",
            SensorKind::Series => "series",
            SensorKind::Commands => "command",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SensorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown sensor kind {:?}", s))
    }
}
