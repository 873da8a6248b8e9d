use foliotui::logic::formatting::{format_tags, truncate_to_width};
use foliotui::model::Model;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the left project accordion
///
/// Each project is one row; the expanded one grows extra lines with its
/// description, tags and slide count.
pub fn render_project_list(f: &mut Frame, area: Rect, model: &Model) {
    let inner_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = model
        .portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(idx, project)| {
            let is_expanded = model.navigation.is_expanded(idx);
            let marker = if is_expanded { "▾" } else { "▸" };

            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{} {} / ", marker, project.number),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    project.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} · {}", project.category, project.year),
                    Style::default().fg(Color::Gray),
                ),
            ])];

            if is_expanded {
                lines.push(Line::from(Span::styled(
                    format!("  {}", truncate_to_width(&project.description, inner_width)),
                    Style::default().fg(Color::Gray),
                )));
                if !project.tags.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", format_tags(&project.tags)),
                        Style::default().fg(Color::Cyan),
                    )));
                }
                let slide_note = if project.has_slides() {
                    format!("  {} slides", project.slides.len())
                } else {
                    format!("  cover: {}", project.cover)
                };
                lines.push(Line::from(Span::styled(
                    slide_note,
                    Style::default().fg(Color::DarkGray),
                )));
            }

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Projects "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 40))
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(model.navigation.selected_project));
    f.render_stateful_widget(list, area, &mut state);
}
