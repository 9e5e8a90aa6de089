//! Infrastructure configuration modules.

pub mod booking;
pub mod logging;
pub mod settings;
