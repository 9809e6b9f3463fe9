// Sensor state as presented to readers

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::sensor::SensorKind;

/// Attribute name -> attribute value, recomputed on every successful poll.
pub type Attributes = BTreeMap<String, String>;

/// Primary reading: an item count, or a pre-formatted amount (disk space).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    Count(usize),
    Amount(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SensorState {
    /// `None` until the first successful poll.
    pub value: Option<SensorValue>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorSnapshot {
    pub kind: SensorKind,
    pub name: String,
    pub unit: String,
    pub icon: &'static str,
    pub state: SensorState,
    pub last_updated: Option<DateTime<Utc>>,
}
