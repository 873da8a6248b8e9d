use crate::{logic, App};
use ratatui::Frame;

use super::{dialogs, footer, gallery, hero, layout, legend, lightbox, menu, project_list, toast};

/// Main render function - orchestrates all UI rendering
/// This replaces the large terminal.draw() closure in main.rs
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Calculate layout
    let layout_info = layout::calculate_layout(size, app.model.ui.compact);

    // The gallery column count depends on the pane width; handlers read it
    // back for cursor math, so it must be recorded before anything draws
    app.last_gallery_cols = logic::layout::grid_columns(layout_info.detail_area.width);

    hero::render_hero(f, layout_info.hero_area, &app.model.portfolio.studio);

    project_list::render_project_list(f, layout_info.list_area, &app.model);

    gallery::render_gallery_pane(
        f,
        layout_info.detail_area,
        &app.model,
        app.last_gallery_cols,
    );

    legend::render_legend(f, layout_info.legend_area, &app.model);

    footer::render_footer(f, layout_info.footer_area, &app.model.portfolio.studio);

    // Overlays, bottom-up: menu, popup, lightbox, toast
    if let Some(menu_state) = &app.model.ui.menu {
        menu::render_menu(f, size, menu_state);
    }

    if let Some(popup) = &app.model.ui.popup {
        dialogs::render_info_popup(f, size, popup, &app.model.portfolio.studio);
    }

    if let Some(lightbox_state) = &app.model.ui.lightbox {
        lightbox::render_lightbox(f, size, lightbox_state, &mut app.image_state_map);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
