//! Command handlers for the `vyc` CLI.
//!
//! Each handler builds its report as a `String` so it can be tested
//! without capturing stdout; `main` prints it.

use std::path::Path;

use crate::CliError;

mod indent;
mod lex;
mod stats;

pub use indent::indent_report;
pub use lex::lex_report;
pub use stats::{file_stats, stats_report, FileStats};

/// Read a source file, classifying failures.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::from_read(path, err))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
