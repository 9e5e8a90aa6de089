//! Booking domain: records, lifecycle rules and listing order.
//!
//! Nothing here touches locks, tasks or I/O.

pub mod booking;
pub mod error;
pub mod listing;

pub use booking::{Booking, BookingId, BookingStatus, NewBooking};
pub use error::BookingError;
pub use listing::{ListQuery, SortKey};
