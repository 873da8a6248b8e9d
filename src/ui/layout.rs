use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top studio identity bar area
    pub hero_area: Rect,
    /// Project accordion area
    pub list_area: Rect,
    /// Project detail / gallery area
    pub detail_area: Rect,
    /// Hotkey legend area
    pub legend_area: Rect,
    /// Bottom contact footer area
    pub footer_area: Rect,
}

/// Calculate the screen layout for all UI components
///
/// In compact mode the list and detail panes are stacked vertically
/// instead of sitting side by side.
pub fn calculate_layout(terminal_size: Rect, compact: bool) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Hero bar (borders + name + tagline)
            Constraint::Min(8),    // Content area (list + detail)
            Constraint::Length(1), // Legend
            Constraint::Length(3), // Contact footer
        ])
        .split(terminal_size);

    let hero_area = main_chunks[0];
    let content_area = main_chunks[1];
    let legend_area = main_chunks[2];
    let footer_area = main_chunks[3];

    let (list_area, detail_area) = if compact {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(content_area);
        (chunks[0], chunks[1])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(content_area);
        (chunks[0], chunks[1])
    };

    LayoutInfo {
        hero_area,
        list_area,
        detail_area,
        legend_area,
        footer_area,
    }
}

/// Centered rectangle for popups, sized as a percentage of the screen
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
