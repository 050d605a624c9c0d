//! Command handlers for the `plait` CLI.
//!
//! Handlers return values instead of printing so they can be tested; the
//! binary renders them with [`crate::report`]. Shared utilities like
//! [`read_file`] live here in the module root.

mod check;
mod rule;

pub use check::{check_files, FileReport, Verdict};
pub use rule::{match_text, parse_match_args, MatchOptions, RuleName};

use crate::DriverError;

/// Read `path` as UTF-8 text.
pub fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|err| DriverError::from_io(path, err))
}
