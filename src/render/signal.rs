//! Three-lamp signal indicator
//!
//! Renders red, yellow and green lamps as emoji glyphs. Lit lamps are
//! wrapped in their bold ANSI color; unlit lamps show a neutral circle.

use anyhow::Result;
use colored::Colorize;

use crate::console::Surface;

const LABEL: &str = "Signal: ";
const RED_LAMP: &str = "🔴";
const YELLOW_LAMP: &str = "🟡";
const GREEN_LAMP: &str = "🟢";
const UNLIT_LAMP: &str = "⚪";

/// Which lamps of a signal head are illuminated
///
/// The flags are independent; rendering always emits one glyph per lamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SignalState {
    /// Red lamp lit
    pub red: bool,
    /// Yellow lamp lit
    pub yellow: bool,
    /// Green lamp lit
    pub green: bool,
}

impl SignalState {
    /// All lamps off
    pub const DARK: Self = Self::new(false, false, false);

    /// Only the red lamp
    pub const RED: Self = Self::new(true, false, false);

    /// Only the yellow lamp
    pub const YELLOW: Self = Self::new(false, true, false);

    /// Only the green lamp
    pub const GREEN: Self = Self::new(false, false, true);

    /// Build a state from individual lamp flags
    #[must_use]
    pub const fn new(red: bool, yellow: bool, green: bool) -> Self {
        Self { red, yellow, green }
    }
}

/// Format the indicator line (label plus three glyphs), without newline.
#[must_use]
pub fn format_signal(state: SignalState) -> String {
    let red = if state.red {
        format!("{RED_LAMP} ").red().bold().to_string()
    } else {
        format!("{UNLIT_LAMP} ")
    };
    let yellow = if state.yellow {
        format!("{YELLOW_LAMP} ").yellow().bold().to_string()
    } else {
        format!("{UNLIT_LAMP} ")
    };
    let green = if state.green {
        GREEN_LAMP.green().bold().to_string()
    } else {
        UNLIT_LAMP.to_string()
    };
    format!("{LABEL}{red}{yellow}{green}")
}

/// Write the indicator line to `surface`.
pub fn render_signal<S: Surface + ?Sized>(surface: &mut S, state: SignalState) -> Result<()> {
    surface.write_line(&format_signal(state))
}
