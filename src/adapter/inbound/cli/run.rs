//! Handler for the `run` command.

use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use crate::infrastructure::config::settings::Config;
use crate::infrastructure::runtime;

/// Run the service until Ctrl-C, then drain background tasks.
pub async fn execute(config: &Config) {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => info!("Ctrl-C received"),
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
        }
        let _ = shutdown_tx.send(true);
    });

    runtime::run_with_shutdown(config, shutdown_rx).await;
}
