//! Inbound adapters (driving side): entry points that call into the core.

pub mod cli;
