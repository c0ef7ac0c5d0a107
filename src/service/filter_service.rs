//! Event stream filtering service.

use std::io::{self, BufRead, Read, Write};

use anyhow::{anyhow, Result};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{Event, FilterError};
use crate::service::adapter::{Format, FormatAdapter};
use crate::service::FilterEngine;

/// Counters for one run over an event stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records read, including skipped ones
    pub processed: usize,
    /// Events written to the output
    pub kept: usize,
    /// Events dropped by the filter
    pub dropped: usize,
    /// Records that failed to parse or evaluate
    pub skipped: usize,
}

/// Service for filtering event streams.
pub struct FilterService {
    config: Config,
    engine: FilterEngine,
    adapter: FormatAdapter,
}

impl FilterService {
    /// Create a new FilterService with the specified format.
    pub fn new(config: Config, engine: FilterEngine, format: Format) -> Self {
        Self {
            config,
            engine,
            adapter: FormatAdapter::new(format),
        }
    }

    /// Filter events from stdin to stdout.
    pub fn run(&self) -> Result<RunSummary> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        let summary = self.process(stdin.lock(), &mut stdout)?;
        stdout.flush()?;

        Ok(summary)
    }

    /// Filter events from `reader` into `writer`.
    pub fn process<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<RunSummary> {
        // Fail before reading any input when nothing is loaded
        self.engine.definition()?;

        let summary = match self.adapter.format() {
            Format::Lines => self.process_lines(reader, writer)?,
            Format::Array => self.process_array(reader, writer)?,
        };

        info!(
            processed = summary.processed,
            kept = summary.kept,
            dropped = summary.dropped,
            skipped = summary.skipped,
            "Run finished"
        );

        Ok(summary)
    }

    fn process_lines<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let parsed = self.adapter.parse_event(&line);
            if let Some(event) = self.handle(i + 1, parsed, &mut summary)? {
                self.adapter.write_line(writer, &event)?;
            }
        }

        Ok(summary)
    }

    fn process_array<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<RunSummary> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let mut summary = RunSummary::default();
        let mut kept = Vec::new();

        for (i, item) in self.adapter.parse_batch(&input)?.into_iter().enumerate() {
            let parsed = Event::from_value(item);
            if let Some(event) = self.handle(i + 1, parsed, &mut summary)? {
                kept.push(event);
            }
        }

        self.adapter.write_batch(writer, &kept)?;
        Ok(summary)
    }

    /// Filter one parsed record, applying the fail-fast policy to errors.
    fn handle(
        &self,
        position: usize,
        parsed: Result<Event, FilterError>,
        summary: &mut RunSummary,
    ) -> Result<Option<Event>> {
        summary.processed += 1;

        let result = parsed.and_then(|event| self.engine.apply(event));
        match result {
            Ok(Some(event)) => {
                debug!(position, event_id = event.id, "Event kept");
                summary.kept += 1;
                Ok(Some(event))
            }
            Ok(None) => {
                debug!(position, "Event dropped");
                summary.dropped += 1;
                Ok(None)
            }
            Err(e) if self.config.fail_fast => Err(anyhow!("Event #{}: {}", position, e)),
            Err(e) => {
                warn!(position, error = %e, "Skipping event");
                summary.skipped += 1;
                Ok(None)
            }
        }
    }
}
