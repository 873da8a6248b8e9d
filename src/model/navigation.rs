//! Navigation Model
//!
//! Selection within the project accordion and the cursor inside an expanded
//! project's gallery grid.

/// Accordion selection and gallery cursor state
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Highlighted row in the project list
    pub selected_project: usize,

    /// Which project is expanded (at most one, accordion-style)
    pub expanded_project: Option<usize>,

    /// Flat cursor index into the expanded project's gallery order
    pub grid_cursor: usize,
}

impl NavigationModel {
    /// Create initial navigation state
    pub fn new() -> Self {
        Self {
            selected_project: 0,
            expanded_project: None,
            grid_cursor: 0,
        }
    }

    /// Toggle the accordion for the given project
    ///
    /// Opening a project closes any other open one; toggling the open
    /// project collapses it. The grid cursor resets on every change.
    pub fn toggle_project(&mut self, index: usize) {
        self.grid_cursor = 0;
        if self.expanded_project == Some(index) {
            self.expanded_project = None;
        } else {
            self.expanded_project = Some(index);
        }
    }

    /// Collapse whatever is expanded
    pub fn collapse(&mut self) {
        self.expanded_project = None;
        self.grid_cursor = 0;
    }

    /// Whether the given project row is the expanded one
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded_project == Some(index)
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}
