//! Rendering surfaces
//!
//! The scheduler and renderers never touch stdout directly; they go through
//! a [`Surface`]. The terminal surface is used at runtime, the memory
//! surface captures frames for tests.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Minimal capability set needed to draw the simulation
pub trait Surface {
    /// Wipe the whole screen and home the cursor.
    fn clear(&mut self) -> Result<()>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Write `text` without a newline and flush, so in-place redraws show up
    /// immediately.
    fn write_inline(&mut self, text: &str) -> Result<()>;
}

/// Surface backed by a real terminal (stdout by default)
pub struct TerminalSurface<W: Write = Stdout> {
    out: W,
}

impl TerminalSurface<Stdout> {
    /// Create a surface writing to the process's standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Create a surface over any writer
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the surface and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .context("Failed to clear the terminal")
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").context("Failed to write to the terminal")
    }

    fn write_inline(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}").context("Failed to write to the terminal")?;
        self.out.flush().context("Failed to flush the terminal")
    }
}

/// In-memory surface that records one string per cleared screen
#[derive(Debug, Default)]
pub struct MemorySurface {
    frames: Vec<String>,
}

impl MemorySurface {
    /// Create an empty surface
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Every frame drawn so far, one per `clear()`
    ///
    /// Text written before the first clear lands in its own leading frame.
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recent frame, if anything was drawn
    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    fn current(&mut self) -> &mut String {
        if self.frames.is_empty() {
            self.frames.push(String::new());
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self) -> Result<()> {
        self.frames.push(String::new());
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let frame = self.current();
        frame.push_str(text);
        frame.push('\n');
        Ok(())
    }

    fn write_inline(&mut self, text: &str) -> Result<()> {
        self.current().push_str(text);
        Ok(())
    }
}
