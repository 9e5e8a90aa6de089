//! Record store port: the authoritative booking table.

use crate::domain::{Booking, BookingId, BookingStatus, NewBooking};

/// Storage operations for bookings.
///
/// Implementations must be strongly consistent: readers may run
/// concurrently with each other but never observe a half-applied write, and
/// id allocation is atomic with the insert. The store does not enforce the
/// booking lifecycle; callers decide which transitions are legal.
pub trait BookingStore: Send + Sync {
    /// Allocate the next id and insert a pending booking stamped now.
    fn create(&self, request: &NewBooking) -> Booking;

    /// Get a booking by id.
    fn get(&self, id: BookingId) -> Option<Booking>;

    /// Snapshot every booking, in no particular order.
    fn all(&self) -> Vec<Booking>;

    /// Overwrite the status and refresh `updated_at`.
    ///
    /// Returns the updated record, or `None` if the id is unknown.
    fn update_status(&self, id: BookingId, status: BookingStatus) -> Option<Booking>;
}
