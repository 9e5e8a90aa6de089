//! Periodic cancellation of stale pending bookings.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::service::BookingService;
use crate::application::scheduler::TaskHandle;
use crate::domain::{BookingError, BookingStatus};

/// Outcome of one expiry sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Bookings examined.
    pub scanned: usize,
    /// Stale pending bookings moved to `Canceled`.
    pub expired: usize,
    /// Bookings resolved by another writer after the snapshot was taken.
    pub skipped: usize,
    /// Stale bookings whose update failed.
    pub failed: usize,
}

impl BookingService {
    /// Cancel every pending booking older than the pending TTL at `now`.
    ///
    /// Works from a store snapshot and goes through the status-update path,
    /// so cached entries are refreshed and a booking resolved since the
    /// snapshot is left alone. A failed update is logged and the sweep moves
    /// on to the next booking.
    pub fn expire_stale_bookings(&self, now: DateTime<Utc>) -> SweepReport {
        let ttl = self.settings.pending_ttl;
        let snapshot = self.store.all();
        let mut report = SweepReport {
            scanned: snapshot.len(),
            ..SweepReport::default()
        };

        for booking in snapshot.iter().filter(|b| b.is_stale(now, ttl)) {
            match self.update_booking_status(booking.id(), BookingStatus::Canceled) {
                Ok(_) => report.expired += 1,
                Err(BookingError::Policy { .. }) => {
                    debug!(booking_id = %booking.id(), "Booking resolved since snapshot, not expired");
                    report.skipped += 1;
                }
                Err(e) => {
                    warn!(booking_id = %booking.id(), error = %e, "Failed to expire booking");
                    report.failed += 1;
                }
            }
        }

        if report.expired > 0 || report.skipped > 0 || report.failed > 0 {
            info!(
                scanned = report.scanned,
                expired = report.expired,
                skipped = report.skipped,
                failed = report.failed,
                "Expiry sweep complete"
            );
        } else {
            debug!(scanned = report.scanned, "Expiry sweep found nothing stale");
        }

        report
    }

    /// Start the recurring expiry sweep on the service's scheduler.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_expiry_sweeper(&self) -> TaskHandle {
        let service = self.clone();
        let interval = self.settings.sweep_interval;

        info!(
            interval_secs = interval.as_secs_f64(),
            ttl_secs = self.settings.pending_ttl.num_seconds(),
            "Expiry sweeper started"
        );

        self.scheduler
            .spawn_periodic("booking-expiry", interval, move || {
                let service = service.clone();
                async move {
                    service.expire_stale_bookings(Utc::now());
                }
            })
    }
}
