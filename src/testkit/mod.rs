//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: builders for bookings and booking requests.
//! - [`store`]: `CountingStore`, a store wrapper that records how often
//!   each operation was called.
//! - [`confirmation`]: `FixedDecider`, a deterministic confirmation outcome.
//! - [`service`]: `ServiceFixture`, a service on in-memory adapters.
//! - [`interleave`]: store and cache wrappers that force one interleaving.

pub mod confirmation;
pub mod domain;
pub mod interleave;
pub mod service;
pub mod store;
