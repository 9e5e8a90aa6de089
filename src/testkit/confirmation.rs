//! Deterministic confirmation outcomes.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::booking::ConfirmationDecider;
use crate::domain::{BookingId, BookingStatus};

/// Always returns the same outcome and counts how often it was asked.
#[derive(Debug)]
pub struct FixedDecider {
    outcome: BookingStatus,
    calls: AtomicUsize,
}

impl FixedDecider {
    pub fn new(outcome: BookingStatus) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn confirming() -> Self {
        Self::new(BookingStatus::Confirmed)
    }

    pub fn rejecting() -> Self {
        Self::new(BookingStatus::Rejected)
    }

    /// Number of decisions made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConfirmationDecider for FixedDecider {
    fn decide(&self, _id: BookingId) -> BookingStatus {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
    }
}
