//! Selection and cursor logic
//!
//! Pure functions for moving the project selection and the gallery grid
//! cursor. The grid cursor is a flat index into the organizer's flattened
//! item order; vertical moves map it through the row structure so the cursor
//! lands in the visually adjacent row.

/// Move the project selection down, clamped to the list end
pub fn select_next(current: usize, list_len: usize) -> usize {
    if list_len == 0 {
        return 0;
    }
    (current + 1).min(list_len - 1)
}

/// Move the project selection up, clamped to the list start
pub fn select_prev(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Last valid selection for g/G style jumps
pub fn select_last(list_len: usize) -> usize {
    list_len.saturating_sub(1)
}

/// Locate a flat cursor index within the grid's row structure
///
/// Returns `(row, column)` for the row-length list the organizer produced,
/// or `None` when the index is past the end.
pub fn cursor_position(flat_index: usize, row_lens: &[usize]) -> Option<(usize, usize)> {
    let mut remaining = flat_index;
    for (row, len) in row_lens.iter().enumerate() {
        if remaining < *len {
            return Some((row, remaining));
        }
        remaining -= len;
    }
    None
}

/// Step the grid cursor one cell right, clamped to the last cell
pub fn cursor_right(flat_index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (flat_index + 1).min(item_count - 1)
}

/// Step the grid cursor one cell left, clamped to the first cell
pub fn cursor_left(flat_index: usize) -> usize {
    flat_index.saturating_sub(1)
}

/// Move the grid cursor one row down, keeping the column where possible
pub fn cursor_down(flat_index: usize, row_lens: &[usize]) -> usize {
    let Some((row, col)) = cursor_position(flat_index, row_lens) else {
        return flat_index;
    };
    if row + 1 >= row_lens.len() {
        return flat_index;
    }

    let next_row_start: usize = row_lens[..row + 1].iter().sum();
    let next_row_len = row_lens[row + 1];
    next_row_start + col.min(next_row_len.saturating_sub(1))
}

/// Move the grid cursor one row up, keeping the column where possible
pub fn cursor_up(flat_index: usize, row_lens: &[usize]) -> usize {
    let Some((row, col)) = cursor_position(flat_index, row_lens) else {
        return flat_index;
    };
    if row == 0 {
        return flat_index;
    }

    let prev_row_start: usize = row_lens[..row - 1].iter().sum();
    let prev_row_len = row_lens[row - 1];
    prev_row_start + col.min(prev_row_len.saturating_sub(1))
}
