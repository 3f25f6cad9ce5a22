//! Countdown progress bar
//!
//! A fixed-width bar that fills as a phase elapses, followed by the
//! remaining seconds: `[██████████████      ]  3s`.

use anyhow::Result;

use crate::console::Surface;

/// Number of cells in the bar
pub const BAR_WIDTH: u32 = 20;

const FILLED_CELL: char = '█';
const EMPTY_CELL: char = ' ';

/// Number of filled cells for a countdown at `remaining` out of `total`.
///
/// # Panics
/// Panics if `total` is zero.
#[must_use]
pub fn filled_cells(total: u32, remaining: u32) -> u32 {
    assert!(total > 0, "progress total must be positive");
    let elapsed = u64::from(total.saturating_sub(remaining));
    let filled = elapsed * u64::from(BAR_WIDTH) / u64::from(total);
    // elapsed <= total, so filled <= BAR_WIDTH
    u32::try_from(filled).map_or(BAR_WIDTH, |f| f.min(BAR_WIDTH))
}

/// Format the bar and remaining-seconds label, without a trailing newline.
#[must_use]
pub fn format_progress(total: u32, remaining: u32) -> String {
    let filled = filled_cells(total, remaining) as usize;
    let empty = BAR_WIDTH as usize - filled;
    format!(
        "[{}{}] {remaining:2}s",
        FILLED_CELL.to_string().repeat(filled),
        EMPTY_CELL.to_string().repeat(empty)
    )
}

/// Draw the bar in place on `surface` and flush it.
pub fn render_progress<S: Surface + ?Sized>(
    surface: &mut S,
    total: u32,
    remaining: u32,
) -> Result<()> {
    surface.write_inline(&format_progress(total, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemorySurface;

    fn count(bar: &str, cell: char) -> usize {
        bar.chars().filter(|&c| c == cell).count()
    }

    #[test]
    fn test_ten_seconds_three_remaining() {
        assert_eq!(filled_cells(10, 3), 14);

        let bar = format_progress(10, 3);
        assert_eq!(count(&bar, FILLED_CELL), 14);
        assert!(bar.starts_with('['));
        assert!(bar.ends_with("]  3s"), "unexpected label: {bar:?}");
        // 14 filled + 6 empty cells between the brackets
        let inner: String = bar.chars().skip(1).take(BAR_WIDTH as usize).collect();
        assert_eq!(inner, format!("{}{}", "█".repeat(14), " ".repeat(6)));
    }

    #[test]
    fn test_empty_at_start_of_phase() {
        assert_eq!(filled_cells(45, 45), 0);
        assert_eq!(format_progress(5, 5), format!("[{}]  5s", " ".repeat(20)));
    }

    #[test]
    fn test_fill_is_monotonic_as_time_runs_out() {
        for total in [5, 10, 35, 45] {
            let mut previous = 0;
            for remaining in (1..=total).rev() {
                let filled = filled_cells(total, remaining);
                assert!(filled >= previous, "total={total} remaining={remaining}");
                assert!(filled <= BAR_WIDTH);
                previous = filled;
            }
        }
    }

    #[test]
    fn test_last_tick_fill_under_exact_division() {
        // 5s transition: 4 elapsed of 5 -> 16 cells, never a full bar at 1s left
        assert_eq!(filled_cells(5, 1), 16);
        assert_eq!(filled_cells(10, 1), 18);
        assert_eq!(filled_cells(45, 1), 19);
        // Only a zero remainder fills the whole bar
        assert_eq!(filled_cells(20, 0), BAR_WIDTH);
    }

    #[test]
    fn test_two_digit_label_is_not_padded() {
        assert!(format_progress(45, 45).ends_with("] 45s"));
    }

    #[test]
    fn test_remaining_above_total_renders_empty_bar() {
        assert_eq!(filled_cells(10, 12), 0);
    }

    #[test]
    #[should_panic(expected = "progress total must be positive")]
    fn test_zero_total_panics() {
        let _ = filled_cells(0, 0);
    }

    #[test]
    fn test_render_writes_inline_without_newline() {
        let mut surface = MemorySurface::new();
        render_progress(&mut surface, 10, 3).unwrap();
        let frame = surface.last_frame().unwrap();
        assert!(!frame.contains('\n'));
        assert_eq!(frame, format_progress(10, 3));
    }
}
