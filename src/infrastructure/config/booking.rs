//! Booking, expiry and demo-data configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::booking::BookingSettings;

/// Upper bound for `pending_ttl_secs` (about ten years).
pub const MAX_PENDING_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Upper bound for `demo_bookings`.
pub const MAX_DEMO_BOOKINGS: u64 = 100_000;

/// Booking service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Price above which a booking is confirmed asynchronously.
    #[serde(default = "default_high_value_threshold")]
    pub high_value_threshold: f64,
    /// Delay before a high-value booking is resolved, in milliseconds.
    #[serde(default = "default_confirmation_delay_ms")]
    pub confirmation_delay_ms: u64,
}

fn default_high_value_threshold() -> f64 {
    50_000.0
}

const fn default_confirmation_delay_ms() -> u64 {
    1_000
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            high_value_threshold: default_high_value_threshold(),
            confirmation_delay_ms: default_confirmation_delay_ms(),
        }
    }
}

/// Expiry sweep configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpiryConfig {
    /// Whether the background sweep runs at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Seconds between sweeps.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
    /// Age in seconds after which a pending booking is canceled.
    #[serde(default = "default_pending_ttl_secs")]
    pub pending_ttl_secs: u64,
}

const fn default_enabled() -> bool {
    true
}

const fn default_sweep_interval_secs() -> u64 {
    60
}

const fn default_pending_ttl_secs() -> u64 {
    300
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sweep_interval_secs: default_sweep_interval_secs(),
            pending_ttl_secs: default_pending_ttl_secs(),
        }
    }
}

/// Demo data loaded into the in-memory store at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Number of demo bookings to preload.
    #[serde(default = "default_demo_bookings")]
    pub demo_bookings: u64,
}

const fn default_demo_bookings() -> u64 {
    10
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_bookings: default_demo_bookings(),
        }
    }
}

/// Combine the booking and expiry sections into service settings.
#[must_use]
pub fn booking_settings(booking: &BookingConfig, expiry: &ExpiryConfig) -> BookingSettings {
    BookingSettings {
        high_value_threshold: booking.high_value_threshold,
        confirmation_delay: Duration::from_millis(booking.confirmation_delay_ms),
        sweep_interval: Duration::from_secs(expiry.sweep_interval_secs),
        pending_ttl: chrono::Duration::seconds(
            i64::try_from(expiry.pending_ttl_secs.min(MAX_PENDING_TTL_SECS)).unwrap_or(0),
        ),
    }
}
