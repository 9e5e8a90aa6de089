//! Cache port: a point-lookup accelerator in front of the record store.

use crate::domain::{Booking, BookingId};

/// Secondary, possibly stale copy of bookings keyed by id.
///
/// A miss is a normal outcome. Entries are only ever written after the
/// store write they reflect has committed. `fill` and `refresh` compare
/// copies by `updated_at` and must do so atomically with the write, so an
/// older copy never replaces a newer one.
pub trait BookingCache: Send + Sync {
    /// Insert or replace the entry for `id`.
    fn set(&self, id: BookingId, booking: Booking);

    /// Insert `booking` unless the cache already holds a copy at least as new.
    fn fill(&self, id: BookingId, booking: Booking);

    /// Replace an existing entry with a newer copy.
    ///
    /// An absent id stays absent. Returns true if the entry was replaced.
    fn refresh(&self, id: BookingId, booking: Booking) -> bool;

    /// Get the cached copy, if any.
    fn get(&self, id: BookingId) -> Option<Booking>;

    /// Drop the entry. Returns true if one was present.
    fn delete(&self, id: BookingId) -> bool;
}
