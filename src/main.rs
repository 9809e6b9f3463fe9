use anyhow::Result;
use sonarr_sensors::*;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    let client = Arc::new(sonarr_client::SonarrClient::new(
        &app_config.sonarr,
        Duration::from_secs(app_config.polling.request_timeout_secs),
    )?);
    let settings = sensor::SensorSettings::from_config(&app_config.sonarr)?;
    let store = store::SensorStore::new();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut conditions = app_config.sonarr.monitored_conditions.clone();
    conditions.sort();
    conditions.dedup();
    if conditions.is_empty() {
        tracing::warn!("sonarr.monitored_conditions is empty; no sensors will run");
    }

    let worker_handles: Vec<_> = conditions
        .into_iter()
        .map(|kind| {
            tracing::info!(sensor = %kind, "Starting sensor");
            worker::spawn(
                sensor::Sensor::new(kind, settings.clone()),
                client.clone(),
                store.clone(),
                worker::WorkerConfig {
                    scan_interval_secs: app_config.polling.scan_interval_secs,
                },
                shutdown_rx.clone(),
            )
        })
        .collect();

    let app = routes::app(store);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(true);
            for handle in worker_handles {
                let _ = handle.await;
            }
        }
    }

    Ok(())
}
