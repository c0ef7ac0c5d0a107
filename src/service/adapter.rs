//! Format adapters for event input and output framing.
//!
//! This module provides input parsing and output formatting for:
//! - JSON Lines: one event object per line (default)
//! - JSON array: a single array of event objects

use anyhow::{anyhow, Result};
use std::io::Write;
use tracing::debug;

use crate::domain::{Event, FilterError};

/// Framing of the event stream on stdin and stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One JSON event per line (default)
    #[default]
    Lines,
    /// A single JSON array of events
    Array,
}

/// Adapter for converting between framed JSON and events.
pub struct FormatAdapter {
    format: Format,
}

impl FormatAdapter {
    /// Create a new adapter for the specified format.
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Parse one event record.
    pub fn parse_event(&self, record: &str) -> Result<Event, FilterError> {
        Event::from_json_str(record)
    }

    /// Split a JSON array input into its raw elements.
    ///
    /// Element shapes are checked later, one by one, so a single malformed
    /// event does not reject the whole batch.
    pub fn parse_batch(&self, input: &str) -> Result<Vec<serde_json::Value>> {
        debug!(bytes = input.len(), "Parsing event array");

        if input.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(input).map_err(|e| anyhow!("Failed to parse event array: {}", e))
    }

    /// Write one kept event in line framing.
    pub fn write_line<W: Write>(&self, writer: &mut W, event: &Event) -> Result<()> {
        let line = serde_json::to_string(event)
            .map_err(|e| anyhow!("Failed to serialize event {}: {}", event.id, e))?;
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    /// Write all kept events as one JSON array.
    pub fn write_batch<W: Write>(&self, writer: &mut W, events: &[Event]) -> Result<()> {
        let output = serde_json::to_string(events)
            .map_err(|e| anyhow!("Failed to serialize events: {}", e))?;
        writeln!(writer, "{}", output)?;
        Ok(())
    }
}
