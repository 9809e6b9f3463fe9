// Byte units for disk space reporting (binary, 1024-based)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Byte unit symbols, ordered by power of 1024.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ByteUnit {
    B,
    KB,
    MB,
    #[default]
    GB,
    TB,
    PB,
    EB,
    ZB,
    YB,
}

impl ByteUnit {
    pub const ALL: [ByteUnit; 9] = [
        ByteUnit::B,
        ByteUnit::KB,
        ByteUnit::MB,
        ByteUnit::GB,
        ByteUnit::TB,
        ByteUnit::PB,
        ByteUnit::EB,
        ByteUnit::ZB,
        ByteUnit::YB,
    ];

    /// Position in [`ByteUnit::ALL`], i.e. the power of 1024 this unit represents.
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ByteUnit::B => "B",
            ByteUnit::KB => "KB",
            ByteUnit::MB => "MB",
            ByteUnit::GB => "GB",
            ByteUnit::TB => "TB",
            ByteUnit::PB => "PB",
            ByteUnit::EB => "EB",
            ByteUnit::ZB => "ZB",
            ByteUnit::YB => "YB",
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ByteUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ByteUnit::ALL
            .into_iter()
            .find(|u| u.symbol() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown byte unit {:?}", s))
    }
}

/// Convert a byte count to `unit`: `bytes / 1024^index`.
pub fn to_unit(bytes: u64, unit: ByteUnit) -> f64 {
    bytes as f64 / 1024f64.powi(unit.index() as i32)
}
