//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to its defaults.
//!
//! # Example
//!
//! ```no_run
//! use booking_engine::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::booking::{
    booking_settings, BookingConfig, ExpiryConfig, SeedConfig, MAX_DEMO_BOOKINGS, MAX_PENDING_TTL_SECS,
};
use super::logging::LoggingConfig;
use crate::application::booking::BookingSettings;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// High-value threshold and confirmation timing.
    #[serde(default)]
    pub booking: BookingConfig,

    /// Expiry sweep timing.
    #[serde(default)]
    pub expiry: ExpiryConfig,

    /// Demo data preloaded into the in-memory store.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        let threshold = self.booking.high_value_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "high_value_threshold",
                reason: "must be a positive number".to_string(),
            }
            .into());
        }
        if self.expiry.sweep_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sweep_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.expiry.pending_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pending_ttl_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.expiry.pending_ttl_secs > MAX_PENDING_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                field: "pending_ttl_secs",
                reason: format!("must be at most {MAX_PENDING_TTL_SECS}"),
            }
            .into());
        }
        if self.seed.demo_bookings > MAX_DEMO_BOOKINGS {
            return Err(ConfigError::InvalidValue {
                field: "demo_bookings",
                reason: format!("must be at most {MAX_DEMO_BOOKINGS}"),
            }
            .into());
        }
        Ok(())
    }

    /// Settings for the booking service.
    #[must_use]
    pub fn booking_settings(&self) -> BookingSettings {
        booking_settings(&self.booking, &self.expiry)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.booking.high_value_threshold, 50_000.0);
        assert_eq!(config.booking.confirmation_delay_ms, 1_000);
        assert!(config.expiry.enabled);
        assert_eq!(config.expiry.sweep_interval_secs, 60);
        assert_eq!(config.expiry.pending_ttl_secs, 300);
        assert_eq!(config.seed.demo_bookings, 10);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse_toml(
            r#"
[logging]
level = "debug"
format = "json"

[booking]
high_value_threshold = 1000.0

[expiry]
enabled = false
pending_ttl_secs = 30

[seed]
demo_bookings = 0
"#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.booking.high_value_threshold, 1000.0);
        assert_eq!(config.booking.confirmation_delay_ms, 1_000);
        assert!(!config.expiry.enabled);
        assert_eq!(config.expiry.pending_ttl_secs, 30);
        assert_eq!(config.seed.demo_bookings, 0);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let result = Config::parse_toml("[booking]\nhigh_value_threshold = 0.0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "high_value_threshold",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_sweep_interval() {
        let result = Config::parse_toml("[expiry]\nsweep_interval_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "sweep_interval_secs",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_oversized_demo_data() {
        let result = Config::parse_toml("[seed]\ndemo_bookings = 1000000\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "demo_bookings",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Config::parse_toml("[booking\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
