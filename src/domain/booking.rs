//! Booking record, identifier and lifecycle status.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::BookingError;

/// Store-assigned booking identifier.
///
/// Ids are allocated by the record store, increase monotonically and are
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    /// Create a new `BookingId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookingId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Lifecycle status of a booking.
///
/// `Pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created, awaiting confirmation or expiry.
    Pending,
    /// Accepted by the confirmation step.
    Confirmed,
    /// Declined by the confirmation step.
    Rejected,
    /// Canceled by the user or by the expiry sweep.
    Canceled,
}

impl BookingStatus {
    /// Stable lowercase name used in logs and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
            Self::Canceled => "canceled",
        }
    }

    /// Returns true for the pending state.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true once the booking has left `Pending`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !self.is_pending()
    }

    /// Check whether a booking in this status may be canceled.
    ///
    /// Confirmed bookings are final; every other status may be canceled,
    /// and canceling twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Policy`] for a confirmed booking.
    pub fn ensure_cancellable(self, id: BookingId) -> Result<(), BookingError> {
        match self {
            Self::Confirmed => Err(BookingError::Policy {
                id,
                reason: "cannot cancel a confirmed booking",
            }),
            Self::Pending | Self::Rejected | Self::Canceled => Ok(()),
        }
    }

    /// Check whether a booking in this status may move to `next`.
    ///
    /// Only `Pending` has outgoing transitions, and nothing moves back to
    /// `Pending`.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Policy`] when `next` is `Pending` or the
    /// booking is already resolved.
    pub fn ensure_transition(self, next: Self, id: BookingId) -> Result<(), BookingError> {
        if next.is_pending() {
            return Err(BookingError::Policy {
                id,
                reason: "status cannot be reset to pending",
            });
        }
        if self.is_terminal() {
            return Err(BookingError::Policy {
                id,
                reason: "booking is already resolved",
            });
        }
        Ok(())
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied fields of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub user_id: u64,
    pub service_id: u64,
    pub price: f64,
}

impl NewBooking {
    #[must_use]
    pub const fn new(user_id: u64, service_id: u64, price: f64) -> Self {
        Self {
            user_id,
            service_id,
            price,
        }
    }

    /// Validate the request before it reaches the store.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] if an id is zero or the price is
    /// not a finite positive amount.
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.user_id == 0 {
            return Err(BookingError::Validation {
                field: "user_id",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.service_id == 0 {
            return Err(BookingError::Validation {
                field: "service_id",
                reason: "must be greater than 0".to_string(),
            });
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(BookingError::Validation {
                field: "price",
                reason: format!("must be a positive amount, got {}", self.price),
            });
        }
        Ok(())
    }
}

/// A single reservation as held by the record store.
///
/// `created_at` never changes after construction; `updated_at` moves forward
/// with every status change and never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    user_id: u64,
    service_id: u64,
    price: f64,
    status: BookingStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Booking {
    /// Create a pending booking stamped at `created_at`.
    #[must_use]
    pub fn new(id: BookingId, request: &NewBooking, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: request.user_id,
            service_id: request.service_id,
            price: request.price,
            status: BookingStatus::Pending,
            created_at,
            updated_at: created_at,
        }
    }

    #[must_use]
    pub const fn id(&self) -> BookingId {
        self.id
    }

    #[must_use]
    pub const fn user_id(&self) -> u64 {
        self.user_id
    }

    #[must_use]
    pub const fn service_id(&self) -> u64 {
        self.service_id
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// True when the price is strictly above `threshold`.
    #[must_use]
    pub fn is_high_value(&self, threshold: f64) -> bool {
        self.price > threshold
    }

    /// Whether this booking has sat in `Pending` for longer than `ttl` at `now`.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        self.status.is_pending() && now.signed_duration_since(self.created_at) > ttl
    }

    /// True when this copy reflects a later write than `other`.
    #[must_use]
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.updated_at > other.updated_at
    }

    /// Overwrite the status and refresh `updated_at`.
    ///
    /// This does not check the lifecycle rules; the booking service does
    /// that before writing. `updated_at` strictly increases with every
    /// call, even if `at` does not, so copies of one booking are ordered by
    /// it.
    pub fn apply_status(&mut self, status: BookingStatus, at: DateTime<Utc>) {
        self.status = status;
        self.updated_at = at.max(self.updated_at + chrono::Duration::nanoseconds(1));
    }
}
