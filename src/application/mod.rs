//! Application services: orchestration over domain types and ports.
//!
//! - [`booking`]: the booking service and its background jobs
//! - [`scheduler`]: recurring and delayed task execution with drain-on-shutdown

pub mod booking;
pub mod scheduler;
