use foliotui::logic::classify::GalleryItem;
use foliotui::logic::formatting::truncate_to_width;
use foliotui::logic::layout::span_weight;
use foliotui::model::{Model, Project};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of one gallery cell including its borders
const CELL_HEIGHT: u16 = 4;

/// One vertical slot in the gallery pane
enum GalleryRow {
    /// Section heading ("Logos", "Posters", ...)
    Title(String),
    /// A row of cells; the second value is the flat index of its first cell
    Items(Vec<GalleryItem>, usize),
}

impl GalleryRow {
    fn height(&self) -> u16 {
        match self {
            GalleryRow::Title(_) => 1,
            GalleryRow::Items(..) => CELL_HEIGHT,
        }
    }
}

/// Render the right pane: gallery when a project is expanded, otherwise an
/// overview of the highlighted project
pub fn render_gallery_pane(f: &mut Frame, area: Rect, model: &Model, cols: usize) {
    match model.expanded_project() {
        Some(project) => {
            render_gallery(f, area, project, cols, model.navigation.grid_cursor)
        }
        None => {
            if let Some(project) = model.selected_project() {
                render_overview(f, area, project);
            }
        }
    }
}

fn render_overview(f: &mut Frame, area: Rect, project: &Project) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} / ", project.number),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                project.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} · {}", project.category, project.year),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::raw(project.description.clone())),
        Line::default(),
    ];

    if project.has_slides() {
        lines.push(Line::from(Span::styled(
            format!("{} slides — press Enter to open", project.slides.len()),
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("cover: {}", project.cover),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let overview = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Project "))
        .wrap(Wrap { trim: false });

    f.render_widget(overview, area);
}

fn render_gallery(f: &mut Frame, area: Rect, project: &Project, cols: usize, cursor: usize) {
    let sections = project.gallery(cols);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} — {} ", project.title, project.strategy.as_str()));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if sections.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            format!("No slides — cover: {}", project.cover),
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(placeholder, inner);
        return;
    }

    // Flatten sections into vertical slots with running flat indices
    let mut rows: Vec<GalleryRow> = Vec::new();
    let mut flat = 0;
    for section in &sections {
        if let Some(title) = &section.title {
            rows.push(GalleryRow::Title(title.clone()));
        }
        for row in &section.rows {
            rows.push(GalleryRow::Items(row.clone(), flat));
            flat += row.len();
        }
    }

    // Scroll so the cursor's row is always visible
    let cursor_row = rows
        .iter()
        .position(|row| match row {
            GalleryRow::Items(items, start) => {
                cursor >= *start && cursor < *start + items.len()
            }
            GalleryRow::Title(_) => false,
        })
        .unwrap_or(0);
    let first_row = first_visible_row(&rows, cursor_row, inner.height);

    let mut y = inner.y;
    for row in rows.iter().skip(first_row) {
        let height = row.height().min(inner.y + inner.height - y);
        if height == 0 {
            break;
        }
        let row_area = Rect::new(inner.x, y, inner.width, height);

        match row {
            GalleryRow::Title(title) => {
                let heading = Paragraph::new(Line::from(Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                f.render_widget(heading, row_area);
            }
            GalleryRow::Items(items, start) => {
                render_item_row(f, row_area, items, *start, cursor);
            }
        }

        y += height;
        if y >= inner.y + inner.height {
            break;
        }
    }
}

fn render_item_row(f: &mut Frame, area: Rect, items: &[GalleryItem], start: usize, cursor: usize) {
    // Cell widths follow the showcase rhythm: most cells one unit wide,
    // every few cells a double-width one
    let weights: Vec<u32> = (0..items.len())
        .map(|offset| span_weight(start + offset) as u32)
        .collect();
    let total: u32 = weights.iter().sum::<u32>().max(1);
    let constraints: Vec<Constraint> = weights
        .iter()
        .map(|w| Constraint::Ratio(*w, total))
        .collect();

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (offset, item) in items.iter().enumerate() {
        let flat = start + offset;
        let is_cursor = flat == cursor;
        let cell_area = cells[offset];
        let cell_width = cell_area.width.saturating_sub(2) as usize;

        let border_style = if is_cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let name_style = if is_cursor {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let cell = Paragraph::new(vec![
            Line::from(Span::styled(
                truncate_to_width(item.display_name(), cell_width),
                name_style,
            )),
            Line::from(Span::styled(
                format!("{} · #{}", item.category.as_str(), item.slide_number),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_widget(cell, cell_area);
    }
}

/// First row to draw so the cursor's row fits inside `height`
fn first_visible_row(rows: &[GalleryRow], cursor_row: usize, height: u16) -> usize {
    let mut first = 0;
    loop {
        let used: u16 = rows[first..=cursor_row.min(rows.len().saturating_sub(1))]
            .iter()
            .map(|r| r.height())
            .sum();
        if used <= height || first >= cursor_row {
            return first;
        }
        first += 1;
    }
}
