//! Service runtime lifecycle.

use tokio::sync::watch;
use tracing::info;

use crate::application::booking::BookingService;
use crate::infrastructure::bootstrap::build_booking_service;
use crate::infrastructure::config::settings::Config;

/// Build the service from `config` and run it until `shutdown` flips to true.
///
/// Returns once every background task has drained.
pub async fn run_with_shutdown(config: &Config, shutdown: watch::Receiver<bool>) {
    let service = build_booking_service(config);
    serve(&service, config.expiry.enabled, shutdown).await;
}

/// Start background work on `service`, wait for shutdown, then drain.
///
/// A closed shutdown channel counts as a shutdown request.
pub async fn serve(service: &BookingService, expiry_enabled: bool, mut shutdown: watch::Receiver<bool>) {
    if expiry_enabled {
        service.start_expiry_sweeper();
    } else {
        info!("Expiry sweeper disabled");
    }

    info!("Booking service running");
    match shutdown.wait_for(|stop| *stop).await {
        Ok(_) => info!("Shutdown signal received"),
        Err(_) => info!("Shutdown channel closed"),
    }

    service.shutdown().await;
    info!("Booking service stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::adapter::outbound::memory::{InMemoryBookingCache, InMemoryBookingStore};
    use crate::application::booking::BookingSettings;
    use crate::application::scheduler::TaskScheduler;

    #[tokio::test]
    async fn serve_returns_after_shutdown_and_drains() {
        let service = BookingService::new(
            Arc::new(InMemoryBookingStore::new()),
            Arc::new(InMemoryBookingCache::new()),
            BookingSettings {
                sweep_interval: Duration::from_millis(10),
                ..BookingSettings::default()
            },
            TaskScheduler::new(),
        );
        let (tx, rx) = watch::channel(false);

        let running = {
            let service = service.clone();
            tokio::spawn(async move { serve(&service, true, rx).await })
        };
        tokio::time::sleep(Duration::from_millis(30)).await;
        tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(2), running)
            .await
            .unwrap()
            .unwrap();
        assert!(service.scheduler().is_shut_down());
        assert_eq!(service.scheduler().active_tasks(), 0);
    }

    #[tokio::test]
    async fn dropped_sender_stops_the_runtime() {
        let config = Config::default();
        let (tx, rx) = watch::channel(false);
        drop(tx);

        tokio::time::timeout(Duration::from_secs(2), run_with_shutdown(&config, rx))
            .await
            .unwrap();
    }
}
