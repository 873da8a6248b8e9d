//! Layout calculation logic
//!
//! Pure functions for width-driven layout decisions: the compact/wide
//! breakpoint, how many gallery columns fit, and the masonry span pattern
//! that gives the flat grid its uneven texture.

/// Terminals narrower than this stack the project list above the gallery
/// instead of side by side (the compact display flag).
pub const COMPACT_BREAKPOINT: u16 = 90;

/// Minimum width of one gallery cell in terminal cells
const MIN_CELL_WIDTH: u16 = 22;

/// Maximum gallery columns regardless of width
const MAX_COLS: usize = 4;

/// Whether the terminal width calls for the compact stacked layout
///
/// # Examples
/// ```
/// use foliotui::logic::layout::is_compact;
///
/// assert!(is_compact(80));
/// assert!(!is_compact(120));
/// ```
pub fn is_compact(width: u16) -> bool {
    width < COMPACT_BREAKPOINT
}

/// Gallery column count for a pane of the given width
///
/// # Examples
/// ```
/// use foliotui::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(20), 1);  // too narrow, never zero
/// assert_eq!(grid_columns(50), 2);
/// assert_eq!(grid_columns(200), 4); // capped
/// ```
pub fn grid_columns(pane_width: u16) -> usize {
    ((pane_width / MIN_CELL_WIDTH) as usize).clamp(1, MAX_COLS)
}

/// Masonry span weight for a cell at the given flat index
///
/// A fixed repeating pattern, mostly single-width with the occasional
/// double-width cell for visual interest. Weights are ratio units within a
/// row, not absolute columns.
pub fn span_weight(flat_index: usize) -> u16 {
    const PATTERN: [u16; 8] = [1, 1, 2, 1, 1, 1, 1, 2];
    PATTERN[flat_index % PATTERN.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_compact_boundary() {
        assert!(is_compact(COMPACT_BREAKPOINT - 1));
        assert!(!is_compact(COMPACT_BREAKPOINT));
    }

    #[test]
    fn test_grid_columns_never_zero() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(5), 1);
    }

    #[test]
    fn test_grid_columns_capped() {
        assert_eq!(grid_columns(u16::MAX), MAX_COLS);
    }

    #[test]
    fn test_span_weight_pattern_repeats() {
        assert_eq!(span_weight(2), 2);
        assert_eq!(span_weight(7), 2);
        assert_eq!(span_weight(10), 2); // 10 % 8 == 2
        assert_eq!(span_weight(0), 1);
        assert_eq!(span_weight(5), 1);
    }
}
