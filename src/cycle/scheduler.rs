//! Phase scheduler
//!
//! Drives the cycle: draws the active phase once per tick, waits one tick,
//! and advances through the phase list, wrapping back to the first phase
//! after the last. The phase list itself is passed in, so the driver knows
//! nothing about what any individual phase shows.

use std::future::{self, Future};
use std::time::Duration;

use anyhow::{bail, Result};

use crate::console::Surface;
use crate::cycle::phase::Phase;
use crate::log::PhaseEvent;
use crate::render::render_tick;

/// Source of the per-tick suspension
pub trait Ticker {
    /// Suspend until the next tick is due
    fn wait(&mut self) -> impl Future<Output = ()>;
}

/// Real-time ticker backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy)]
pub struct SleepTicker {
    period: Duration,
}

impl SleepTicker {
    /// One tick per second
    #[must_use]
    pub const fn per_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// One tick per `period`
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Ticker for SleepTicker {
    fn wait(&mut self) -> impl Future<Output = ()> {
        tokio::time::sleep(self.period)
    }
}

/// Ticker that never blocks and counts how often it was awaited
///
/// Lets a whole cycle run in tests without real-time delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantTicker {
    ticks: u64,
}

impl InstantTicker {
    /// Create a ticker with a zero count
    #[must_use]
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Number of ticks waited so far
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Ticker for InstantTicker {
    fn wait(&mut self) -> impl Future<Output = ()> {
        self.ticks += 1;
        future::ready(())
    }
}

/// Where the scheduler is inside the cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CyclePosition {
    /// Index of the active phase
    pub phase_index: usize,
    /// Ticks already spent in the active phase
    pub elapsed_ticks: u32,
}

/// Sequential driver over a fixed list of phases
pub struct PhaseScheduler<'p, S: Surface, T: Ticker> {
    phases: &'p [Phase],
    surface: S,
    ticker: T,
    position: CyclePosition,
    completed_cycles: u64,
}

impl<'p, S: Surface, T: Ticker> PhaseScheduler<'p, S, T> {
    /// Create a scheduler positioned at the start of the first phase.
    ///
    /// # Arguments
    /// * `phases` - The cycle to drive, in order
    /// * `surface` - Where every tick is drawn
    /// * `ticker` - Source of the per-tick suspension
    ///
    /// # Errors
    /// Returns an error if:
    /// - `phases` is empty
    /// - any phase has a zero duration
    pub fn new(phases: &'p [Phase], surface: S, ticker: T) -> Result<Self> {
        if phases.is_empty() {
            bail!("Phase cycle cannot be empty");
        }
        if let Some(phase) = phases.iter().find(|p| p.duration_secs == 0) {
            bail!("Phase '{}' has zero duration", phase.title);
        }
        Ok(Self {
            phases,
            surface,
            ticker,
            position: CyclePosition::default(),
            completed_cycles: 0,
        })
    }

    /// Current position in the cycle
    #[must_use]
    pub const fn position(&self) -> CyclePosition {
        self.position
    }

    /// The active phase
    #[must_use]
    pub fn current_phase(&self) -> &'p Phase {
        &self.phases[self.position.phase_index]
    }

    /// Seconds left in the active phase, counting the current tick
    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.current_phase().duration_secs - self.position.elapsed_ticks
    }

    /// Full passes through the phase list completed so far
    #[must_use]
    pub const fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// The surface being drawn on
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The ticker driving the loop
    #[must_use]
    pub const fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Draw the current tick, wait for the ticker, then advance.
    ///
    /// Returns `true` when this tick completed the active phase.
    pub async fn tick(&mut self) -> Result<bool> {
        let phase = self.current_phase();
        render_tick(&mut self.surface, phase, self.position.elapsed_ticks)?;
        self.ticker.wait().await;
        Ok(self.advance())
    }

    /// Run until `max_cycles` full cycles have completed, or forever.
    ///
    /// # Arguments
    /// * `max_cycles` - Number of full cycles to run; `None` never returns
    ///   on its own
    /// * `on_phase_start` - Called before the first tick of every phase
    ///
    /// # Errors
    /// Returns an error if:
    /// - Drawing to the surface fails
    /// - `on_phase_start` returns an error
    pub async fn run<F>(&mut self, max_cycles: Option<u64>, mut on_phase_start: F) -> Result<()>
    where
        F: FnMut(&PhaseEvent) -> Result<()>,
    {
        loop {
            if max_cycles.is_some_and(|max| self.completed_cycles >= max) {
                return Ok(());
            }
            if self.position.elapsed_ticks == 0 {
                let event = PhaseEvent::started(
                    self.completed_cycles,
                    self.position.phase_index,
                    self.current_phase(),
                );
                on_phase_start(&event)?;
            }
            self.tick().await?;
        }
    }

    fn advance(&mut self) -> bool {
        self.position.elapsed_ticks += 1;
        if self.position.elapsed_ticks < self.current_phase().duration_secs {
            return false;
        }
        self.position.elapsed_ticks = 0;
        self.position.phase_index = (self.position.phase_index + 1) % self.phases.len();
        if self.position.phase_index == 0 {
            self.completed_cycles += 1;
        }
        true
    }
}
