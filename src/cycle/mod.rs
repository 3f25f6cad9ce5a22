//! Intersection cycle
//!
//! The static phase table and the scheduler that drives it.

pub mod phase;
pub mod scheduler;

pub use phase::{Phase, Road, SignalPattern, INTERSECTION_CYCLE};
pub use scheduler::{CyclePosition, InstantTicker, PhaseScheduler, SleepTicker, Ticker};
