// Background poll loop: one task per sensor, sequential polls on a fixed interval.

use crate::sensor::{PollOutcome, Sensor};
use crate::sonarr_client::{FetchError, SonarrClient};
use crate::store::SensorStore;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{Duration, interval};
use tracing::Instrument;

pub struct WorkerConfig {
    pub scan_interval_secs: u64,
}

/// Polls `sensor`, publishing to `store` on success, and logs the outcome.
pub async fn poll_once(
    sensor: &mut Sensor,
    client: &SonarrClient,
    store: &SensorStore,
) -> Result<PollOutcome, FetchError> {
    let result = sensor.update(client).await;
    match &result {
        Ok(PollOutcome::Updated) => {
            store.publish(sensor).await;
            tracing::debug!(
                operation = "poll",
                attributes = sensor.state().attributes.len(),
                "sensor updated"
            );
        }
        Ok(PollOutcome::Skipped(status)) => {
            tracing::info!(
                operation = "poll",
                status = %status,
                "non-200 response; keeping previous state"
            );
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                operation = "poll",
                "poll failed; keeping previous state"
            );
        }
    }
    result
}

/// Spawns the poll loop for one sensor. Polls immediately, then every
/// `scan_interval_secs`; a poll that overruns its slot skips missed ticks.
/// Exits when `shutdown_rx` changes or its sender is dropped.
pub fn spawn(
    mut sensor: Sensor,
    client: Arc<SonarrClient>,
    store: SensorStore,
    config: WorkerConfig,
    mut shutdown_rx: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    let span = tracing::span!(
        tracing::Level::DEBUG,
        "worker",
        sensor = %sensor.kind(),
        scan_interval_secs = config.scan_interval_secs
    );

    tokio::spawn(
        async move {
            store.publish(&sensor).await;

            let mut tick = interval(Duration::from_secs(config.scan_interval_secs));
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        let _ = poll_once(&mut sensor, &client, &store).await;
                    }
                    _ = shutdown_rx.changed() => {
                        tracing::debug!("Worker shutting down");
                        break;
                    }
                }
            }
        }
        .instrument(span),
    )
}
