use super::layout::centered_rect;
use foliotui::model::{InfoPopup, Studio};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the About or Contact popup reachable from the menu
pub fn render_info_popup(f: &mut Frame, area: Rect, popup: &InfoPopup, studio: &Studio) {
    let popup_area = centered_rect(60, 50, area);
    f.render_widget(Clear, popup_area);

    let (title, lines) = match popup {
        InfoPopup::About => about_lines(studio),
        InfoPopup::Contact => contact_lines(studio),
    };

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::White)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(body, popup_area);
}

fn about_lines(studio: &Studio) -> (&'static str, Vec<Line<'static>>) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            studio.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            studio.tagline.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("“{}”", studio.philosophy),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::raw(format!("{} — {}", studio.owner, studio.location))),
        Line::default(),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    (" About ", lines)
}

fn contact_lines(studio: &Studio) -> (&'static str, Vec<Line<'static>>) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Let's work together",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            studio.email.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::raw(studio.location.clone())),
        Line::default(),
    ];
    for social in &studio.socials {
        lines.push(Line::from(Span::styled(
            social.clone(),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    )));
    (" Contact ", lines)
}
