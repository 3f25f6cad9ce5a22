//! Crossing - intersection traffic-light simulation
//!
//! CLI entry point: sets up the console and runs the phase cycle.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Stderr};

use anyhow::{Context, Result};
use clap::Parser;

use crossing::console;
use crossing::{
    EventLogger, PhaseEvent, PhaseScheduler, SleepTicker, TerminalSurface, INTERSECTION_CYCLE,
};

/// Four-way intersection traffic-light simulation
///
/// Cycles main-road flow, blinking transitions, pedestrian crossings and
/// secondary-road flow, redrawing the signals once per second. Runs until
/// interrupted unless `--cycles` is given.
#[derive(Parser, Debug)]
#[command(name = "crossing", version, about)]
struct Cli {
    /// Stop after this many full cycles instead of running forever
    #[arg(long)]
    cycles: Option<u64>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Emit a JSON line on stderr each time a phase starts
    #[arg(long)]
    events: bool,
}

impl Cli {
    /// Colors are on unless `--no-color` was given
    const fn colors_enabled(&self) -> bool {
        !self.no_color
    }
}

/// Forward a phase event to the logger, if event output is enabled.
fn log_event(logger: Option<&mut EventLogger<Stderr>>, event: &PhaseEvent) -> Result<()> {
    logger.map_or(Ok(()), |logger| logger.append(event))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    console::initialize(cli.colors_enabled());

    let mut events = cli.events.then(|| EventLogger::new(io::stderr()));
    let mut scheduler = PhaseScheduler::new(
        &INTERSECTION_CYCLE,
        TerminalSurface::stdout(),
        SleepTicker::per_second(),
    )
    .context("Invalid phase table")?;

    scheduler
        .run(cli.cycles, |event| log_event(events.as_mut(), event))
        .await
        .context("Simulation stopped")?;

    // Leave the countdown line before handing the terminal back
    println!();
    Ok(())
}
