use foliotui::model::Studio;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the top studio identity bar
pub fn render_hero(f: &mut Frame, area: Rect, studio: &Studio) {
    let name_line = Line::from(vec![
        Span::styled(
            studio.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            studio.location.clone(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("   [m] menu", Style::default().fg(Color::DarkGray)),
    ]);

    let tagline_line = Line::from(Span::styled(
        studio.tagline.clone(),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    ));

    let hero = Paragraph::new(vec![name_line, tagline_line])
        .block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(hero, area);
}
