//! Booking service: read-through lookups, lifecycle rules and the two
//! background jobs that mutate bookings on their own.
//!
//! - [`service`]: create, lookup, list, cancel and status-update operations
//! - [`expiry`]: recurring sweep that cancels stale pending bookings
//! - [`confirmation`]: one-shot delayed resolution of high-value bookings
//!
//! The sweep, the confirmation task and user requests can all write the
//! same booking. Each checks the current status before writing, but two
//! writers that pass the check together are serialized by the store and the
//! last one wins; a user cancel racing a confirmation is not arbitrated
//! further. The cache follows whichever write lands last.

pub mod confirmation;
pub mod expiry;
pub mod service;

pub use confirmation::{ConfirmationDecider, RandomDecider};
pub use expiry::SweepReport;
pub use service::{BookingService, BookingSettings};
