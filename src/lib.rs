//! Booking engine: an in-memory booking store fronted by a read-through
//! cache, with delayed confirmation of high-value bookings and periodic
//! expiry of stale pending ones.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Booking entities, status rules and listing queries
//! - [`port`] - Store and cache traits the core depends on
//! - [`adapter`] - In-memory store/cache and the command line
//! - [`application`] - The booking service and its task scheduler
//! - [`infrastructure`] - Configuration, wiring and runtime lifecycle
//! - [`error`] - Crate-level error types
//!
//! # Example
//!
//! ```no_run
//! use booking_engine::domain::{ListQuery, NewBooking};
//! use booking_engine::infrastructure::bootstrap::build_booking_service;
//! use booking_engine::infrastructure::config::settings::Config;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let service = build_booking_service(&Config::default());
//! let booking = service.create_booking(NewBooking::new(1, 2, 120.0))?;
//! assert!(service.get_booking(booking.id()).is_ok());
//! let _ = service.list_bookings(ListQuery::default());
//! service.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
