//! Console setup and rendering surfaces
//!
//! One-time process setup for UTF-8 glyphs and ANSI colors, plus the
//! [`Surface`] abstraction every renderer writes through.

pub mod surface;

pub use surface::{MemorySurface, Surface, TerminalSurface};

/// Prepare the host terminal for colored emoji output.
///
/// Call once at process start. Every platform call is best-effort: a
/// terminal that refuses the setup still gets the output, just possibly
/// without colors.
///
/// Rust writes UTF-8 natively (the Windows console path goes through the
/// wide-character API), so no codepage or locale switch is needed; only
/// ANSI escape processing has to be turned on for legacy Windows consoles.
///
/// # Arguments
/// * `colors` - Whether lit lamps and status lines carry ANSI color codes.
///   Applied unconditionally, so neither the environment (`NO_COLOR`,
///   `CLICOLOR`) nor a piped stdout changes the output.
pub fn initialize(colors: bool) {
    #[cfg(windows)]
    {
        let _ = colored::control::set_virtual_terminal(true);
    }
    set_color_enabled(colors);
}

/// Turn ANSI color codes on or off for everything rendered afterwards.
///
/// The setting is process-wide.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
