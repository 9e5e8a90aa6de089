//! Infrastructure: configuration, wiring and process lifecycle.

pub mod bootstrap;
pub mod config;
pub mod runtime;
