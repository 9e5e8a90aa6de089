//! Booking operations over the record store and its read-through cache.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, trace};

use super::confirmation::{ConfirmationDecider, RandomDecider};
use crate::application::scheduler::TaskScheduler;
use crate::domain::{Booking, BookingError, BookingId, BookingStatus, ListQuery, NewBooking};
use crate::port::outbound::cache::BookingCache;
use crate::port::outbound::store::BookingStore;

/// Tunables for the booking service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingSettings {
    /// Bookings priced strictly above this get async confirmation.
    pub high_value_threshold: f64,
    /// Wait before resolving a high-value booking.
    pub confirmation_delay: Duration,
    /// How often the expiry sweep runs.
    pub sweep_interval: Duration,
    /// Pending bookings older than this are canceled by the sweep.
    pub pending_ttl: chrono::Duration,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            high_value_threshold: 50_000.0,
            confirmation_delay: Duration::from_secs(1),
            sweep_interval: Duration::from_secs(60),
            pending_ttl: chrono::Duration::minutes(5),
        }
    }
}

/// Orchestrates the store, the cache and the background booking tasks.
///
/// Cheap to clone; clones share the store, cache and scheduler. The store
/// is always written first and the cache updated or invalidated afterwards,
/// so a reader can see a briefly stale cache entry but never one that runs
/// ahead of the store.
#[derive(Clone)]
pub struct BookingService {
    pub(super) store: Arc<dyn BookingStore>,
    pub(super) cache: Arc<dyn BookingCache>,
    pub(super) settings: BookingSettings,
    pub(super) scheduler: TaskScheduler,
    pub(super) decider: Arc<dyn ConfirmationDecider>,
}

impl BookingService {
    /// Create a service that resolves high-value bookings at random.
    pub fn new(
        store: Arc<dyn BookingStore>,
        cache: Arc<dyn BookingCache>,
        settings: BookingSettings,
        scheduler: TaskScheduler,
    ) -> Self {
        Self {
            store,
            cache,
            settings,
            scheduler,
            decider: Arc::new(RandomDecider),
        }
    }

    /// Replace the confirmation outcome source.
    #[must_use]
    pub fn with_decider(mut self, decider: Arc<dyn ConfirmationDecider>) -> Self {
        self.decider = decider;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &BookingSettings {
        &self.settings
    }

    #[must_use]
    pub const fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    /// Create a pending booking.
    ///
    /// The new record is cached immediately. Bookings above the high-value
    /// threshold also get a confirmation task scheduled; its outcome never
    /// reaches the caller. Scheduling needs a running tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] for a zero id or a non-positive
    /// price. Nothing is written in that case.
    pub fn create_booking(&self, request: NewBooking) -> Result<Booking, BookingError> {
        request.validate()?;

        let booking = self.store.create(&request);
        self.cache.set(booking.id(), booking.clone());

        info!(
            booking_id = %booking.id(),
            user_id = booking.user_id(),
            service_id = booking.service_id(),
            price = booking.price(),
            "Booking created"
        );

        if booking.is_high_value(self.settings.high_value_threshold) {
            self.schedule_confirmation(booking.id());
        }

        Ok(booking)
    }

    /// Look a booking up, cache first.
    ///
    /// A hit returns without touching the store. A miss reads the store and
    /// fills the cache before returning, then re-reads the store once: a
    /// status write that committed between the read and the fill found no
    /// entry to refresh, so the fill is brought up to date here.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the store has no such id.
    pub fn get_booking(&self, id: BookingId) -> Result<Booking, BookingError> {
        if let Some(booking) = self.cache.get(id) {
            trace!(booking_id = %id, "Cache hit");
            return Ok(booking);
        }

        trace!(booking_id = %id, "Cache miss");
        let booking = self.store.get(id).ok_or(BookingError::NotFound(id))?;
        self.cache.fill(id, booking.clone());

        match self.store.get(id) {
            Some(current) if current.is_newer_than(&booking) => {
                trace!(booking_id = %id, "Store changed during cache fill");
                self.cache.refresh(id, current.clone());
                Ok(current)
            }
            _ => Ok(booking),
        }
    }

    /// List bookings straight from the store, filtered and sorted.
    ///
    /// The cache is not consulted. An empty result is not an error.
    #[must_use]
    pub fn list_bookings(&self, query: ListQuery) -> Vec<Booking> {
        query.apply(self.store.all(), self.settings.high_value_threshold)
    }

    /// Cancel a booking unless it is already confirmed.
    ///
    /// The current status is read through the cache. On success the cache
    /// entry is dropped rather than rewritten, so a confirmation finishing
    /// later cannot leave a stale copy behind.
    ///
    /// A confirmation landing between the status check and the write is
    /// overwritten: the last store write wins.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id and
    /// [`BookingError::Policy`] for a confirmed booking.
    pub fn cancel_booking(&self, id: BookingId) -> Result<(), BookingError> {
        let current = self.get_booking(id)?;
        current.status().ensure_cancellable(id)?;

        self.store
            .update_status(id, BookingStatus::Canceled)
            .ok_or(BookingError::NotFound(id))?;
        self.cache.delete(id);

        info!(booking_id = %id, previous = %current.status(), "Booking canceled");
        Ok(())
    }

    /// Move a pending booking to `status` and refresh an existing cache entry.
    ///
    /// The current status is read from the store. Ids that are not cached
    /// stay uncached; the store write alone decides success. A write from
    /// another caller landing between the status check and this write is
    /// overwritten: the last store write wins.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id and
    /// [`BookingError::Policy`] when `status` is `Pending` or the booking is
    /// already resolved.
    pub fn update_booking_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, BookingError> {
        let current = self.store.get(id).ok_or(BookingError::NotFound(id))?;
        current.status().ensure_transition(status, id)?;

        let updated = self
            .store
            .update_status(id, status)
            .ok_or(BookingError::NotFound(id))?;

        if !self.cache.refresh(id, updated.clone()) {
            trace!(booking_id = %id, "No cached entry refreshed");
        }

        info!(booking_id = %id, status = %status, "Booking status updated");
        Ok(updated)
    }

    /// Cancel waiting background tasks and wait for running ones.
    pub async fn shutdown(&self) {
        self.scheduler.shutdown().await;
    }
}
