//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! The booking service depends on these contracts only, never on a concrete
//! store or cache.

pub mod cache;
pub mod store;
