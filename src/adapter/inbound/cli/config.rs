//! Config resolution shared by the CLI commands.

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load the config file at `path`, or the defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}
