//! Handler for the `check` command.

use std::path::Path;

use super::config::load_config;
use crate::error::Result;

/// Validate configuration without starting the service.
///
/// # Errors
///
/// Returns the configuration error if the file cannot be read, parsed or
/// validated.
pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let source = config_path.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    println!("Configuration is valid ({source})");
    println!(
        "high_value_threshold={} confirmation_delay_ms={} expiry_enabled={} sweep_interval_secs={} pending_ttl_secs={} demo_bookings={}",
        config.booking.high_value_threshold,
        config.booking.confirmation_delay_ms,
        config.expiry.enabled,
        config.expiry.sweep_interval_secs,
        config.expiry.pending_ttl_secs,
        config.seed.demo_bookings,
    );
    Ok(())
}
