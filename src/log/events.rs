//! JSONL (JSON Lines) phase event stream
//!
//! Emits one JSON object per phase start so the simulation can be followed
//! by another process without scraping the terminal drawing.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cycle::phase::{Phase, Road};

/// A phase became active
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseEvent {
    /// When the phase started
    pub timestamp: DateTime<Utc>,
    /// Completed cycles before this phase (0 during the first pass)
    pub cycle: u64,
    /// 0-based position of the phase in the cycle
    pub phase: usize,
    /// Banner title of the phase
    pub title: String,
    /// Phase length in seconds
    pub duration_secs: u32,
    /// Whether the vehicle signal blinks during the phase
    #[serde(default)]
    pub blinking: bool,
    /// Road whose pedestrians cross, for pedestrian phases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossing: Option<Road>,
}

impl PhaseEvent {
    /// Build the event for `phase` starting now
    #[must_use]
    pub fn started(cycle: u64, index: usize, phase: &Phase) -> Self {
        Self {
            timestamp: Utc::now(),
            cycle,
            phase: index,
            title: phase.title.to_string(),
            duration_secs: phase.duration_secs,
            blinking: phase.is_blinking(),
            crossing: phase.crossing,
        }
    }
}

/// Writes [`PhaseEvent`]s as JSON Lines to any writer (stderr at runtime)
pub struct EventLogger<W: Write> {
    out: W,
}

impl<W: Write> EventLogger<W> {
    /// Create a logger over `out`
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Append one event as a single JSON line
    ///
    /// The writer is flushed after every event so a consumer tailing the
    /// stream sees phase starts as they happen.
    ///
    /// # Arguments
    /// * `event` - The phase event to log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The event cannot be serialized to JSON
    /// - Writing to or flushing the underlying writer fails
    pub fn append(&mut self, event: &PhaseEvent) -> Result<()> {
        let json = serde_json::to_string(event).context("Failed to serialize phase event")?;
        writeln!(self.out, "{json}").context("Failed to write phase event")?;
        self.out.flush().context("Failed to flush phase event")
    }

    /// Consume the logger and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
