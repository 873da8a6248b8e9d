use foliotui::model::{MenuEntry, MenuState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Width of the slide-out menu panel
const MENU_WIDTH: u16 = 24;

/// Render the slide-out menu along the right edge
pub fn render_menu(f: &mut Frame, area: Rect, state: &MenuState) {
    let width = MENU_WIDTH.min(area.width);
    let menu_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    };

    f.render_widget(Clear, menu_area);

    let items: Vec<ListItem> = MenuEntry::ALL
        .iter()
        .map(|entry| ListItem::new(format!("  {}", entry.label())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Menu ")
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, menu_area, &mut list_state);
}
