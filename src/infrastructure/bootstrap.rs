//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::adapter::outbound::memory::{InMemoryBookingCache, InMemoryBookingStore};
use crate::application::booking::BookingService;
use crate::application::scheduler::TaskScheduler;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::cache::BookingCache;
use crate::port::outbound::store::BookingStore;

/// Build the record store, preloaded with the configured demo bookings.
pub(crate) fn build_store(config: &Config) -> Arc<dyn BookingStore> {
    let count = config.seed.demo_bookings;
    if count > 0 {
        info!(bookings = count, "Seeding in-memory store with demo bookings");
    }
    Arc::new(InMemoryBookingStore::seeded(count, Utc::now()))
}

/// Build the booking cache.
pub(crate) fn build_cache() -> Arc<dyn BookingCache> {
    Arc::new(InMemoryBookingCache::new())
}

/// Wire store, cache and scheduler into a booking service.
///
/// Background tasks are not started here.
#[must_use]
pub fn build_booking_service(config: &Config) -> BookingService {
    let settings = config.booking_settings();
    info!(
        high_value_threshold = settings.high_value_threshold,
        confirmation_delay_ms = config.booking.confirmation_delay_ms,
        "Booking service configured"
    );
    BookingService::new(
        build_store(config),
        build_cache(),
        settings,
        TaskScheduler::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ListQuery, SortKey};

    #[test]
    fn service_is_seeded_from_config() {
        let config = Config::parse_toml("[seed]\ndemo_bookings = 3\n").unwrap();
        let service = build_booking_service(&config);

        let listed = service.list_bookings(ListQuery::new(SortKey::Id, false));
        assert_eq!(listed.len(), 3);
    }

    #[test]
    fn zero_seed_gives_empty_store() {
        let config = Config::parse_toml("[seed]\ndemo_bookings = 0\n").unwrap();
        let service = build_booking_service(&config);

        assert!(service.list_bookings(ListQuery::default()).is_empty());
    }
}
