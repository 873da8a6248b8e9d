use crate::ImagePreviewState;
use foliotui::model::LightboxState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use ratatui_image::StatefulImage;
use std::collections::HashMap;

/// Render the full-screen slide viewer
///
/// Covers the whole frame: header with position counter, the slide image
/// (or its metadata when the image could not be rendered), and a hint bar.
pub fn render_lightbox(
    f: &mut Frame,
    area: Rect,
    state: &LightboxState,
    image_state_map: &mut HashMap<String, ImagePreviewState>,
) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(
            " {}  [{} / {}] ",
            state.current().display_name(),
            state.index + 1,
            state.count()
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let image_area = chunks[0];
    let caption_area = chunks[1];
    let hint_area = chunks[2];

    let path = &state.current().path;
    match image_state_map.get_mut(path) {
        Some(ImagePreviewState::Ready { protocol, metadata }) => {
            f.render_stateful_widget(StatefulImage::default(), image_area, protocol);

            let mut caption = Vec::new();
            if let Some((w, h)) = metadata.dimensions {
                caption.push(format!("{}x{}", w, h));
            }
            if let Some(format) = &metadata.format {
                caption.push(format.clone());
            }
            caption.push(crate::utils::format_bytes(metadata.file_size));
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    caption.join(" · "),
                    Style::default().fg(Color::DarkGray),
                )))
                .alignment(Alignment::Center),
                caption_area,
            );
        }
        Some(ImagePreviewState::Failed { metadata }) => {
            let reason = metadata
                .format
                .clone()
                .unwrap_or_else(|| "Unavailable".to_string());
            render_placeholder(f, image_area, path, &reason, metadata.file_size);
        }
        None => {
            render_placeholder(f, image_area, path, "Loading...", 0);
        }
    }

    let hints = Line::from(vec![
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(":Prev/Next  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(":Close"),
    ]);
    f.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        hint_area,
    );
}

/// Text stand-in when the slide image cannot be drawn
fn render_placeholder(f: &mut Frame, area: Rect, path: &str, reason: &str, file_size: u64) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            path.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];
    if file_size > 0 {
        lines.push(Line::from(Span::styled(
            crate::utils::format_bytes(file_size),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let placeholder = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}
