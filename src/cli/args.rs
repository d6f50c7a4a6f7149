//! CLI argument definitions using clap
//!
//! Commands:
//! - classpromo evaluate [--config <path>] [--date <YYYY-MM-DD>] [--dry-run]
//! - classpromo batch [--config <path>] [--date <YYYY-MM-DD>] --input <path> [--output <path>]
//! - classpromo rules [--config <path>]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// classpromo - board-aware class promotion for student records
#[derive(Parser, Debug)]
#[command(name = "classpromo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate one student record read from stdin
    Evaluate {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Evaluation date; defaults to today on the configured clock
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Report the decision without changing the returned record
        #[arg(long)]
        dry_run: bool,
    },

    /// Promote every record in a JSON array file
    Batch {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Evaluation date; defaults to today on the configured clock
        #[arg(long)]
        date: Option<NaiveDate>,

        /// JSON file holding an array of records
        #[arg(long)]
        input: PathBuf,

        /// Where to write the updated records; embedded in the response if omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the active rule table
    Rules {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
