//! Concurrent in-memory booking cache.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{Booking, BookingId};
use crate::port::outbound::cache::BookingCache;

/// Thread-safe booking cache backed by a sharded concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryBookingCache {
    entries: DashMap<BookingId, Booking>,
}

impl InMemoryBookingCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached bookings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `id` currently has an entry.
    #[must_use]
    pub fn contains(&self, id: BookingId) -> bool {
        self.entries.contains_key(&id)
    }
}

impl BookingCache for InMemoryBookingCache {
    fn set(&self, id: BookingId, booking: Booking) {
        self.entries.insert(id, booking);
    }

    fn fill(&self, id: BookingId, booking: Booking) {
        match self.entries.entry(id) {
            Entry::Occupied(mut entry) => {
                if booking.is_newer_than(entry.get()) {
                    entry.insert(booking);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(booking);
            }
        }
    }

    fn refresh(&self, id: BookingId, booking: Booking) -> bool {
        // Holds the shard lock, so a concurrent delete cannot slip between
        // the presence check and the write.
        match self.entries.get_mut(&id) {
            Some(mut entry) if booking.is_newer_than(entry.value()) => {
                *entry = booking;
                true
            }
            _ => false,
        }
    }

    fn get(&self, id: BookingId) -> Option<Booking> {
        self.entries.get(&id).map(|entry| entry.value().clone())
    }

    fn delete(&self, id: BookingId) -> bool {
        self.entries.remove(&id).is_some()
    }
}
