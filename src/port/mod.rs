//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │    (BookingService)     │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌─────────────┐                 ┌─────────────┐
//!         │   Store     │                 │   Cache     │
//!         │   Adapter   │                 │   Adapter   │
//!         └─────────────┘                 └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`BookingStore`] - Authoritative booking records
//! - [`BookingCache`] - Id-keyed read accelerator

pub mod outbound;

pub use outbound::cache::BookingCache;
pub use outbound::store::BookingStore;
