//! Command-line front end for the Vyper scanner.
//!
//! The binary (`src/main.rs`) only dispatches; argument parsing, command
//! reports, and tracing setup live here so they can be tested.

mod cli;
pub mod commands;
mod error;
mod tracing_setup;

pub use cli::{parse_args, Command, USAGE};
pub use error::CliError;
pub use tracing_setup::init_tracing;
