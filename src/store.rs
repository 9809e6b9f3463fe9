// Latest sensor snapshots, written by workers and read by the HTTP routes

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::SensorSnapshot;
use crate::sensor::{Sensor, SensorKind};

#[derive(Clone, Default)]
pub struct SensorStore {
    snapshots: Arc<RwLock<BTreeMap<SensorKind, SensorSnapshot>>>,
}

impl SensorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the snapshot for `sensor`'s kind.
    pub async fn publish(&self, sensor: &Sensor) {
        self.snapshots
            .write()
            .await
            .insert(sensor.kind(), sensor.snapshot());
    }

    pub async fn get(&self, kind: SensorKind) -> Option<SensorSnapshot> {
        self.snapshots.read().await.get(&kind).cloned()
    }

    /// All snapshots, in [`SensorKind`] order.
    pub async fn all(&self) -> Vec<SensorSnapshot> {
        self.snapshots.read().await.values().cloned().collect()
    }
}
