//! event-filter: declarative keep/drop filtering of structured event records.
//!
//! Reads JSON events from stdin, evaluates them against a filter definition,
//! and writes the events that are kept to stdout.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use cli::{Cli, Commands};
use event_filter::config::{self, Config, ConfigService};
use event_filter::domain::logger;
use event_filter::{FilterEngine, FilterService};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        logger::init(&config)?;
    }

    match cli.command {
        Commands::Apply { filter, format } => {
            let path = filter_path(filter, &config)?;
            let engine = load_engine(&path)?;
            let service = FilterService::new(config, engine, format);
            let summary = service.run()?;
            if summary.skipped > 0 && !cli.quiet {
                eprintln!(
                    "Skipped {} of {} events (enable --debug for details)",
                    summary.skipped, summary.processed
                );
            }
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check { filter } => {
            config::validate(&config)?;
            let path = filter.or_else(|| config.filter_path.clone());
            if let Some(path) = path {
                load_engine(&path)?;
                if !cli.quiet {
                    eprintln!("Filter definition is valid: {}", path.display());
                }
            }
            if !cli.quiet {
                eprintln!("Configuration is valid.");
            }
        }
        Commands::Version => {
            println!("event-filter {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Filter definition path from the command line, falling back to the configuration.
fn filter_path(arg: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match arg.or_else(|| config.filter_path.clone()) {
        Some(path) => Ok(path),
        None => bail!("No filter definition given: use --filter or set filter_path"),
    }
}

fn load_engine(path: &Path) -> Result<FilterEngine> {
    let mut engine = FilterEngine::new();
    engine
        .load_file(path)
        .with_context(|| format!("Failed to load filter definition: {}", path.display()))?;
    Ok(engine)
}
