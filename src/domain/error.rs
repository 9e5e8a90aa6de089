//! Errors surfaced by booking operations.
//!
//! Store and cache adapters never produce these directly: they report
//! `Option`/`bool` outcomes, and the booking service decides which of them
//! are user-visible failures.
//!
//! # Examples
//!
//! ```
//! use booking_engine::domain::{BookingError, NewBooking};
//!
//! let request = NewBooking::new(1, 2, 0.0);
//! assert!(matches!(
//!     request.validate(),
//!     Err(BookingError::Validation { field: "price", .. })
//! ));
//! ```

use thiserror::Error;

use super::booking::BookingId;

/// Failures of the booking core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    /// The request was rejected before any store mutation.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Offending request field.
        field: &'static str,
        /// Human-readable explanation.
        reason: String,
    },

    /// No booking exists with this id.
    #[error("booking {0} not found")]
    NotFound(BookingId),

    /// The requested transition is not allowed for the booking's status.
    #[error("booking {id}: {reason}")]
    Policy {
        /// Booking the transition was attempted on.
        id: BookingId,
        /// Which rule was violated.
        reason: &'static str,
    },
}

impl BookingError {
    /// True when the caller referenced an id the store does not know.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
