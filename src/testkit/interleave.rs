//! Store and cache wrappers that run a one-shot action at a chosen point
//! inside a service call, to pin down one specific interleaving.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{Booking, BookingId, BookingStatus, NewBooking};
use crate::port::outbound::cache::BookingCache;
use crate::port::outbound::store::BookingStore;

type Action = Box<dyn FnOnce() + Send>;

/// Holds at most one pending action.
#[derive(Default)]
struct Trigger(Mutex<Option<Action>>);

impl Trigger {
    fn arm(&self, action: impl FnOnce() + Send + 'static) {
        *self.0.lock() = Some(Box::new(action));
    }

    fn fire(&self) {
        let action = self.0.lock().take();
        if let Some(action) = action {
            action();
        }
    }
}

/// Delegates to a store, running armed actions around individual calls.
pub struct InterleavingStore {
    inner: Arc<dyn BookingStore>,
    after_get: Trigger,
    after_all: Trigger,
    before_update: Trigger,
}

impl InterleavingStore {
    pub fn new(inner: Arc<dyn BookingStore>) -> Self {
        Self {
            inner,
            after_get: Trigger::default(),
            after_all: Trigger::default(),
            before_update: Trigger::default(),
        }
    }

    /// Run `action` once, after the next `get` has read but before it returns.
    pub fn after_next_get(&self, action: impl FnOnce() + Send + 'static) {
        self.after_get.arm(action);
    }

    /// Run `action` once, after the next `all` has taken its snapshot.
    pub fn after_next_all(&self, action: impl FnOnce() + Send + 'static) {
        self.after_all.arm(action);
    }

    /// Run `action` once, right before the next `update_status` writes.
    pub fn before_next_update(&self, action: impl FnOnce() + Send + 'static) {
        self.before_update.arm(action);
    }
}

impl BookingStore for InterleavingStore {
    fn create(&self, request: &NewBooking) -> Booking {
        self.inner.create(request)
    }

    fn get(&self, id: BookingId) -> Option<Booking> {
        let found = self.inner.get(id);
        self.after_get.fire();
        found
    }

    fn all(&self) -> Vec<Booking> {
        let snapshot = self.inner.all();
        self.after_all.fire();
        snapshot
    }

    fn update_status(&self, id: BookingId, status: BookingStatus) -> Option<Booking> {
        self.before_update.fire();
        self.inner.update_status(id, status)
    }
}

/// Delegates to a cache, running an armed action before a refresh.
pub struct InterleavingCache {
    inner: Arc<dyn BookingCache>,
    before_refresh: Trigger,
}

impl InterleavingCache {
    pub fn new(inner: Arc<dyn BookingCache>) -> Self {
        Self {
            inner,
            before_refresh: Trigger::default(),
        }
    }

    /// Run `action` once, right before the next `refresh` reaches the cache.
    pub fn before_next_refresh(&self, action: impl FnOnce() + Send + 'static) {
        self.before_refresh.arm(action);
    }
}

impl BookingCache for InterleavingCache {
    fn set(&self, id: BookingId, booking: Booking) {
        self.inner.set(id, booking);
    }

    fn fill(&self, id: BookingId, booking: Booking) {
        self.inner.fill(id, booking);
    }

    fn refresh(&self, id: BookingId, booking: Booking) -> bool {
        self.before_refresh.fire();
        self.inner.refresh(id, booking)
    }

    fn get(&self, id: BookingId) -> Option<Booking> {
        self.inner.get(id)
    }

    fn delete(&self, id: BookingId) -> bool {
        self.inner.delete(id)
    }
}
