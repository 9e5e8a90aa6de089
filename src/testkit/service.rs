//! A booking service wired to in-memory adapters, with handles on both.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::interleave::{InterleavingCache, InterleavingStore};
use super::store::CountingStore;
use crate::adapter::outbound::memory::{InMemoryBookingCache, InMemoryBookingStore};
use crate::application::booking::{BookingService, BookingSettings, ConfirmationDecider};
use crate::application::scheduler::TaskScheduler;
use crate::port::outbound::cache::BookingCache;
use crate::port::outbound::store::BookingStore;

/// A service sharing a fixture's store and cache through interleaving wrappers.
pub struct InterleavedService {
    pub store: Arc<InterleavingStore>,
    pub cache: Arc<InterleavingCache>,
    pub service: BookingService,
}

/// Service plus the store and cache it was built on.
pub struct ServiceFixture {
    pub store: Arc<CountingStore<InMemoryBookingStore>>,
    pub cache: Arc<InMemoryBookingCache>,
    pub service: BookingService,
}

impl ServiceFixture {
    /// Empty store, default settings.
    pub fn new() -> Self {
        Self::with_store(InMemoryBookingStore::new(), BookingSettings::default())
    }

    /// Store preloaded with `count` demo bookings aged 1..=count minutes at `now`.
    pub fn seeded(count: u64, now: DateTime<Utc>, settings: BookingSettings) -> Self {
        Self::with_store(InMemoryBookingStore::seeded(count, now), settings)
    }

    pub fn with_settings(settings: BookingSettings) -> Self {
        Self::with_store(InMemoryBookingStore::new(), settings)
    }

    pub fn with_store(store: InMemoryBookingStore, settings: BookingSettings) -> Self {
        let store = Arc::new(CountingStore::new(store));
        let cache = Arc::new(InMemoryBookingCache::new());
        let service = BookingService::new(
            Arc::clone(&store) as Arc<dyn BookingStore>,
            Arc::clone(&cache) as Arc<dyn BookingCache>,
            settings,
            TaskScheduler::new(),
        );
        Self {
            store,
            cache,
            service,
        }
    }

    /// Swap in a deterministic confirmation outcome.
    #[must_use]
    pub fn with_decider(mut self, decider: Arc<dyn ConfirmationDecider>) -> Self {
        self.service = self.service.with_decider(decider);
        self
    }

    /// A second service over the same store and cache whose calls can be
    /// interleaved with arbitrary actions.
    pub fn interleaved(&self) -> InterleavedService {
        let store = Arc::new(InterleavingStore::new(
            Arc::clone(&self.store) as Arc<dyn BookingStore>
        ));
        let cache = Arc::new(InterleavingCache::new(
            Arc::clone(&self.cache) as Arc<dyn BookingCache>
        ));
        let service = BookingService::new(
            Arc::clone(&store) as Arc<dyn BookingStore>,
            Arc::clone(&cache) as Arc<dyn BookingCache>,
            *self.service.settings(),
            TaskScheduler::new(),
        );
        InterleavedService {
            store,
            cache,
            service,
        }
    }
}

impl Default for ServiceFixture {
    fn default() -> Self {
        Self::new()
    }
}
