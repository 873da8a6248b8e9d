//! Formatting and display logic
//!
//! Pure functions for fitting text into fixed-width panes.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Truncate a string to a display width, appending an ellipsis when cut
///
/// Width is measured in terminal cells, not chars, so wide glyphs in asset
/// names do not overflow their cell.
///
/// # Examples
/// ```
/// use foliotui::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("inception", 20), "inception");
/// assert_eq!(truncate_to_width("ColorPaletteSlide5", 10), "ColorPale…");
/// assert_eq!(truncate_to_width("abc", 0), "");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Join tags into the uppercase pill line used under project briefs
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{}]", t.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ")
}
