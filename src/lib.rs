//! Crossing - four-way intersection traffic-light simulation
//!
//! Cycles through a fixed table of vehicle and pedestrian phases and
//! redraws the intersection's signals and countdown on the terminal once
//! per second.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod console;
pub mod cycle;
pub mod log;
pub mod render;

// Re-export commonly used types
pub use console::{MemorySurface, Surface, TerminalSurface};
pub use cycle::{CyclePosition, Phase, PhaseScheduler, SleepTicker, Ticker, INTERSECTION_CYCLE};
pub use log::{EventLogger, PhaseEvent};
pub use render::SignalState;
