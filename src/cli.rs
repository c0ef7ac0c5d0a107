//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use event_filter::Format;

/// Declarative keep/drop filtering of structured event records
#[derive(Parser)]
#[command(
    name = "event-filter",
    version,
    about = "Declarative keep/drop filtering of structured event records",
    long_about = "Evaluates a JSON filter definition (criteria + action) against JSON events \
                  read from stdin and writes the events that are kept to stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Filter events from stdin to stdout (alias: run)
    #[command(alias = "run")]
    Apply {
        /// Filter definition file (defaults to filter_path from the configuration)
        #[arg(long, short = 'F')]
        filter: Option<PathBuf>,

        /// Framing of the events on stdin and stdout
        #[arg(long, short = 'f', default_value = "lines")]
        format: Format,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration and filter definition
    Check {
        /// Filter definition file (defaults to filter_path from the configuration)
        #[arg(long, short = 'F')]
        filter: Option<PathBuf>,
    },
    /// Display version information
    Version,
}
