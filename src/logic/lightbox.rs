//! Lightbox index math
//!
//! Pure functions for the image viewer's wrap-around navigation. The index
//! always originates from a rendered, bounded grid, so an out-of-range open
//! is a programming error upstream; `clamp_open_index` guards it instead of
//! panicking.

/// Advance with wrap-around: `(i + 1) % n`
///
/// # Examples
/// ```
/// use foliotui::logic::lightbox::next_index;
///
/// assert_eq!(next_index(0, 4), 1);
/// assert_eq!(next_index(3, 4), 0); // wraps
/// assert_eq!(next_index(0, 1), 0); // single item is a no-op
/// ```
pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1) % count
}

/// Retreat with wrap-around: `(i + n - 1) % n`
///
/// # Examples
/// ```
/// use foliotui::logic::lightbox::prev_index;
///
/// assert_eq!(prev_index(0, 4), 3); // wraps
/// assert_eq!(prev_index(2, 4), 1);
/// assert_eq!(prev_index(0, 1), 0); // single item is a no-op
/// ```
pub fn prev_index(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + count - 1) % count
}

/// Clamp an opening index into `[0, count)`
pub fn clamp_open_index(requested: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        requested.min(count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_at_end() {
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn test_prev_wraps_at_start() {
        assert_eq!(prev_index(0, 4), 3);
    }

    #[test]
    fn test_single_item_is_noop() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn test_cyclic_property() {
        // N steps in either direction returns to the start for any start
        for n in 1..=8 {
            for start in 0..n {
                let mut i = start;
                for _ in 0..n {
                    i = next_index(i, n);
                }
                assert_eq!(i, start, "next cycle broken for n={} start={}", n, start);

                let mut i = start;
                for _ in 0..n {
                    i = prev_index(i, n);
                }
                assert_eq!(i, start, "prev cycle broken for n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        for n in 1..=5 {
            for start in 0..n {
                assert_eq!(prev_index(next_index(start, n), n), start);
            }
        }
    }

    #[test]
    fn test_clamp_open_index() {
        assert_eq!(clamp_open_index(0, 4), 0);
        assert_eq!(clamp_open_index(3, 4), 3);
        assert_eq!(clamp_open_index(99, 4), 3);
        assert_eq!(clamp_open_index(5, 0), 0);
    }
}
