//! Terminal rendering
//!
//! Pure formatting functions plus thin wrappers that write through a
//! [`crate::console::Surface`].

pub mod frame;
pub mod progress;
pub mod signal;

pub use frame::{format_banner, render_tick};
pub use progress::{filled_cells, format_progress, render_progress, BAR_WIDTH};
pub use signal::{format_signal, render_signal, SignalState};
