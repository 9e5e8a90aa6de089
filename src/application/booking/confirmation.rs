//! Delayed confirmation of high-value bookings.

use rand::Rng;
use tracing::{info, warn};

use super::service::BookingService;
use crate::application::scheduler::TaskHandle;
use crate::domain::{Booking, BookingError, BookingId, BookingStatus};

/// Chooses how a high-value booking is resolved.
pub trait ConfirmationDecider: Send + Sync {
    /// Return `Confirmed` or `Rejected` for `id`.
    fn decide(&self, id: BookingId) -> BookingStatus;
}

/// Confirms or rejects with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDecider;

impl ConfirmationDecider for RandomDecider {
    fn decide(&self, _id: BookingId) -> BookingStatus {
        if rand::thread_rng().gen_bool(0.5) {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Rejected
        }
    }
}

impl BookingService {
    /// Resolve a high-value booking now, through the status-update path.
    ///
    /// # Errors
    ///
    /// Propagates the status update failure, e.g. an unknown id.
    pub fn resolve_confirmation(&self, id: BookingId) -> Result<Booking, BookingError> {
        let outcome = self.decider.decide(id);
        self.update_booking_status(id, outcome)
    }

    /// Schedule [`BookingService::resolve_confirmation`] after the configured delay.
    ///
    /// Failures are logged and go no further.
    pub(super) fn schedule_confirmation(&self, id: BookingId) -> TaskHandle {
        let service = self.clone();
        self.scheduler.spawn_delayed(
            "booking-confirmation",
            self.settings.confirmation_delay,
            async move {
                match service.resolve_confirmation(id) {
                    Ok(booking) => {
                        info!(booking_id = %id, status = %booking.status(), "High-value booking resolved");
                    }
                    Err(BookingError::Policy { .. }) => {
                        info!(booking_id = %id, "High-value booking already resolved, confirmation dropped");
                    }
                    Err(e) => {
                        warn!(booking_id = %id, error = %e, "Failed to resolve high-value booking");
                    }
                }
            },
        )
    }
}
