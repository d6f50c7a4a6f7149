//! CLI module for classpromo
//!
//! Provides command-line interface for:
//! - evaluate: Promote one record read from stdin
//! - batch: Promote every record in a JSON array file
//! - rules: Show the active rule table

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{batch, evaluate, evaluate_record, rules, run, run_batch, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_record, read_records, write_error, write_records, write_response};
