//! Store wrappers that observe how the service uses its store.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{Booking, BookingId, BookingStatus, NewBooking};
use crate::port::outbound::store::BookingStore;

/// Delegates to an inner store while counting point reads, scans and writes.
#[derive(Debug, Default)]
pub struct CountingStore<S> {
    inner: S,
    reads: AtomicUsize,
    scans: AtomicUsize,
    writes: AtomicUsize,
}

impl<S: BookingStore> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
            scans: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// The wrapped store. Calls made through it are not counted.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of `get` calls.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `all` calls.
    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    /// Number of `create` and `update_status` calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl<S: BookingStore> BookingStore for CountingStore<S> {
    fn create(&self, request: &NewBooking) -> Booking {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.create(request)
    }

    fn get(&self, id: BookingId) -> Option<Booking> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id)
    }

    fn all(&self) -> Vec<Booking> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.all()
    }

    fn update_status(&self, id: BookingId, status: BookingStatus) -> Option<Booking> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.update_status(id, status)
    }
}
