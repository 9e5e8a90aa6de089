//! Builders for booking primitives used across tests.
//!
//! Provides concise factory functions for [`Booking`] and [`NewBooking`]
//! so tests focus on assertions rather than construction boilerplate.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Booking, BookingId, NewBooking};

/// A valid request for user 1, service 2 at `price`.
pub fn request(price: f64) -> NewBooking {
    NewBooking::new(1, 2, price)
}

/// A pending booking with the given id and price, created at `created_at`.
pub fn booking_at(id: u64, price: f64, created_at: DateTime<Utc>) -> Booking {
    Booking::new(BookingId::new(id), &request(price), created_at)
}

/// A pending booking created `minutes` before `now`.
pub fn aged_booking(id: u64, price: f64, now: DateTime<Utc>, minutes: i64) -> Booking {
    booking_at(id, price, now - Duration::minutes(minutes))
}

/// Collect the raw ids of `bookings`, preserving order.
pub fn ids(bookings: &[Booking]) -> Vec<u64> {
    bookings.iter().map(|b| b.id().value()).collect()
}
