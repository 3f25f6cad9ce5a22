//! Logging and observability
//!
//! Structured phase events as JSON Lines, kept apart from the human-facing
//! terminal drawing.

pub mod events;

pub use events::{EventLogger, PhaseEvent};
