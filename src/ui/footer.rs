use foliotui::model::Studio;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bottom contact footer
pub fn render_footer(f: &mut Frame, area: Rect, studio: &Studio) {
    let mut spans = vec![
        Span::styled(
            studio.email.clone(),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("  ·  {}", studio.location),
            Style::default().fg(Color::Gray),
        ),
    ];

    for social in &studio.socials {
        spans.push(Span::styled(
            format!("  ·  {}", social),
            Style::default().fg(Color::DarkGray),
        ));
    }

    spans.push(Span::styled(
        format!("  ·  © {}", studio.name),
        Style::default().fg(Color::DarkGray),
    ));

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::TOP).title(" Contact "));

    f.render_widget(footer, area);
}
