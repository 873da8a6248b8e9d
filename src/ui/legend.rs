use foliotui::model::Model;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(model: &Model) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if model.ui.lightbox.is_some() {
        hotkey_spans.extend(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(":Prev/Next  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Close  "),
        ]);
        return hotkey_spans;
    }

    if model.ui.menu.is_some() || model.ui.popup.is_some() {
        hotkey_spans.extend(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Select  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Close  "),
        ]);
        return hotkey_spans;
    }

    let expanded = model
        .navigation
        .is_expanded(model.navigation.selected_project);

    let nav_key = if model.ui.vim_mode { "hjkl" } else { "↑/↓/←/→" };
    if expanded {
        hotkey_spans.extend(vec![
            Span::styled(nav_key, Style::default().fg(Color::Yellow)),
            Span::raw(":Grid  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":View  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Collapse  "),
        ]);
    } else {
        let list_key = if model.ui.vim_mode { "j/k" } else { "↑/↓" };
        hotkey_spans.extend(vec![
            Span::styled(list_key, Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Expand  "),
        ]);
        if model.ui.vim_mode {
            hotkey_spans.extend(vec![
                Span::styled("g/G", Style::default().fg(Color::Yellow)),
                Span::raw(":First/Last  "),
            ]);
        }
    }

    hotkey_spans.extend(vec![
        Span::styled("m", Style::default().fg(Color::Yellow)),
        Span::raw(":Menu  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the context-aware hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, model: &Model) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(model)))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliotui::config::Config;
    use foliotui::model::{LightboxState, MenuState};
    use foliotui::logic::classify::classify_slides;

    fn sample_model() -> Model {
        Model::new(Config::builtin().into_portfolio(), false)
    }

    fn spans_text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_legend_default_shows_expand() {
        let model = sample_model();
        let text = spans_text(&build_hotkey_spans(&model));
        assert!(text.contains("Expand"));
        assert!(text.contains("Quit"));
    }

    #[test]
    fn test_legend_expanded_shows_grid_keys() {
        let mut model = sample_model();
        model.navigation.toggle_project(0);
        let text = spans_text(&build_hotkey_spans(&model));
        assert!(text.contains("Grid"));
        assert!(text.contains("Collapse"));
    }

    #[test]
    fn test_legend_lightbox_takes_over() {
        let mut model = sample_model();
        let items = classify_slides(&["x/Slide1.jpg".to_string()]);
        model.ui.lightbox = LightboxState::open(items, 0);
        let text = spans_text(&build_hotkey_spans(&model));
        assert!(text.contains("Prev/Next"));
        assert!(!text.contains("Quit"));
    }

    #[test]
    fn test_legend_menu_shows_select() {
        let mut model = sample_model();
        model.ui.menu = Some(MenuState::new());
        let text = spans_text(&build_hotkey_spans(&model));
        assert!(text.contains("Select"));
    }

    #[test]
    fn test_legend_vim_mode_uses_vim_keys() {
        let mut model = Model::new(Config::builtin().into_portfolio(), true);
        let text = spans_text(&build_hotkey_spans(&model));
        assert!(text.contains("j/k"));
        assert!(text.contains("g/G"));

        model.navigation.toggle_project(0);
        let text = spans_text(&build_hotkey_spans(&model));
        assert!(text.contains("hjkl"));
    }
}
