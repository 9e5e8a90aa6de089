//! Adapters: concrete implementations at the edges of the hexagon.
//!
//! - [`inbound`]: the command line that drives the service
//! - [`outbound`]: in-memory store and cache behind the outbound ports

pub mod inbound;
pub mod outbound;
