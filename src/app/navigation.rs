//! Navigation methods
//!
//! Accordion toggling, gallery cursor movement and menu activation.

use crate::{log_debug, logic, model, App};
use foliotui::logic::classify::GalleryItem;

impl App {
    /// Move the project selection down one row
    pub(crate) fn select_next_project(&mut self) {
        let count = self.model.portfolio.project_count();
        self.model.navigation.selected_project =
            logic::navigation::select_next(self.model.navigation.selected_project, count);
    }

    /// Move the project selection up one row
    pub(crate) fn select_prev_project(&mut self) {
        self.model.navigation.selected_project =
            logic::navigation::select_prev(self.model.navigation.selected_project);
    }

    /// Jump to the first project
    pub(crate) fn select_first_project(&mut self) {
        self.model.navigation.selected_project = 0;
    }

    /// Jump to the last project
    pub(crate) fn select_last_project(&mut self) {
        self.model.navigation.selected_project =
            logic::navigation::select_last(self.model.portfolio.project_count());
    }

    /// Toggle the accordion for the highlighted project
    pub(crate) fn toggle_selected_project(&mut self) {
        let index = self.model.navigation.selected_project;
        if index >= self.model.portfolio.project_count() {
            return;
        }
        self.model.navigation.toggle_project(index);
        if let Some(project) = self.expanded_project() {
            log_debug(&format!("Expanded project: {}", project.title));
        }
    }

    /// The currently expanded project, if any
    pub(crate) fn expanded_project(&self) -> Option<&model::Project> {
        let index = self.model.navigation.expanded_project?;
        self.model.portfolio.projects.get(index)
    }

    /// Gallery items of the expanded project in display order
    ///
    /// This is the order the lightbox pages through, so it must match what
    /// the gallery pane draws.
    pub(crate) fn expanded_gallery_items(&self) -> Vec<GalleryItem> {
        match self.expanded_project() {
            Some(project) => {
                logic::organize::flatten(&project.gallery(self.last_gallery_cols))
            }
            None => Vec::new(),
        }
    }

    /// Row lengths of the expanded project's gallery, in display order
    pub(crate) fn expanded_gallery_row_lens(&self) -> Vec<usize> {
        match self.expanded_project() {
            Some(project) => project
                .gallery(self.last_gallery_cols)
                .iter()
                .flat_map(|section| section.rows.iter().map(|row| row.len()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Move the gallery cursor one cell to the right
    pub(crate) fn grid_cursor_right(&mut self) {
        let count = self.expanded_gallery_items().len();
        self.model.navigation.grid_cursor =
            logic::navigation::cursor_right(self.model.navigation.grid_cursor, count);
    }

    /// Move the gallery cursor one cell to the left
    pub(crate) fn grid_cursor_left(&mut self) {
        self.model.navigation.grid_cursor =
            logic::navigation::cursor_left(self.model.navigation.grid_cursor);
    }

    /// Move the gallery cursor down one row, keeping the column
    pub(crate) fn grid_cursor_down(&mut self) {
        let row_lens = self.expanded_gallery_row_lens();
        self.model.navigation.grid_cursor =
            logic::navigation::cursor_down(self.model.navigation.grid_cursor, &row_lens);
    }

    /// Move the gallery cursor up one row, keeping the column
    pub(crate) fn grid_cursor_up(&mut self) {
        let row_lens = self.expanded_gallery_row_lens();
        self.model.navigation.grid_cursor =
            logic::navigation::cursor_up(self.model.navigation.grid_cursor, &row_lens);
    }

    /// Act on the highlighted menu entry and close the menu
    pub(crate) fn activate_menu_entry(&mut self) {
        let entry = match &self.model.ui.menu {
            Some(menu) => menu.entry(),
            None => return,
        };
        self.model.ui.menu = None;

        match entry {
            model::MenuEntry::Home => {
                // Back to the top: first project, nothing expanded
                self.model.navigation.collapse();
                self.model.navigation.selected_project = 0;
            }
            model::MenuEntry::Work => {
                self.model.navigation.selected_project = 0;
            }
            model::MenuEntry::About => {
                self.model.ui.popup = Some(model::InfoPopup::About);
            }
            model::MenuEntry::Contact => {
                self.model.ui.popup = Some(model::InfoPopup::Contact);
            }
        }
    }
}
