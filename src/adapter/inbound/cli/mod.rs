//! Command-line adapter for the `bookingd` binary.

pub mod check;
pub mod command;
pub mod config;
pub mod list;
pub mod run;
