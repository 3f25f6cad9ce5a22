//! Full-screen frame for one tick of a phase
//!
//! Banner, signal lines and countdown, drawn on a freshly cleared screen.

use anyhow::Result;
use colored::Colorize;

use crate::console::Surface;
use crate::cycle::phase::Phase;
use crate::render::progress::render_progress;
use crate::render::signal::render_signal;

/// Inner width of the banner box, in columns
pub const BANNER_WIDTH: usize = 40;

/// Format the three-line box-drawing banner with `title` centred.
#[must_use]
pub fn format_banner(title: &str) -> [String; 3] {
    let rule = "═".repeat(BANNER_WIDTH);
    [
        format!("╔{rule}╗"),
        format!("║{title:^BANNER_WIDTH$}║"),
        format!("╚{rule}╝"),
    ]
}

/// Draw tick `tick` (0-based) of `phase` onto a cleared `surface`.
///
/// The countdown line is left without a newline so the cursor stays on it.
pub fn render_tick<S: Surface + ?Sized>(surface: &mut S, phase: &Phase, tick: u32) -> Result<()> {
    surface.clear()?;
    for line in format_banner(phase.title) {
        surface.write_line(&line)?;
    }

    match (phase.crossing, phase.pedestrian_signal()) {
        (Some(road), Some(pedestrians)) => {
            surface.write_line(&format!("{road} cars: STOPPED").red().bold().to_string())?;
            render_signal(surface, phase.vehicle_signal(tick))?;
            surface.write_line("")?;
            surface.write_line(
                &format!("{road} pedestrians: CROSSING")
                    .green()
                    .bold()
                    .to_string(),
            )?;
            render_signal(surface, pedestrians)?;
        }
        _ => render_signal(surface, phase.vehicle_signal(tick))?,
    }

    let remaining = phase.duration_secs.saturating_sub(tick);
    surface.write_inline(&format!("\r{}", phase.countdown_label))?;
    render_progress(surface, phase.duration_secs, remaining)
}
