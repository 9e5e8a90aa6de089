//! Handler for the `list` command.

use std::path::Path;

use super::command::ListArgs;
use super::config::load_config;
use crate::domain::{ListQuery, SortKey};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_booking_service;

/// Print the bookings a freshly started service would hold.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or serialization fails.
pub fn execute(config_path: Option<&Path>, args: &ListArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let service = build_booking_service(&config);

    let query = ListQuery::new(SortKey::parse_lenient(args.sort.as_deref()), args.high_value);
    let bookings = service.list_bookings(query);

    println!("{}", serde_json::to_string_pretty(&bookings)?);
    Ok(())
}
