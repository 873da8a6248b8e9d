//! Pure Application Model
//!
//! Cloneable state for the application, organized into focused sub-models:
//!
//! - **PortfolioModel**: the studio and its projects (immutable after load)
//! - **NavigationModel**: project selection, accordion state, grid cursor
//! - **UiModel**: menu, popups, lightbox, toast, compact flag
//!
//! Key principles:
//! - Clone + Debug: state can be snapshotted and compared in tests
//! - No I/O: image loading and terminal work live in the runtime
//! - Pure accessors: helper methods are side-effect free

pub mod navigation;
pub mod portfolio;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use portfolio::{PortfolioModel, Project, Studio};
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// The studio and its projects
    pub portfolio: PortfolioModel,

    /// Selection, accordion and grid cursor state
    pub navigation: NavigationModel,

    /// Menu, popups, lightbox and visual flags
    pub ui: UiModel,
}

impl Model {
    /// Create the model from loaded portfolio data
    pub fn new(portfolio: PortfolioModel, vim_mode: bool) -> Self {
        Self {
            portfolio,
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Currently selected project (if the portfolio is non-empty)
    pub fn selected_project(&self) -> Option<&Project> {
        self.portfolio
            .projects
            .get(self.navigation.selected_project)
    }

    /// Currently expanded project (if any)
    pub fn expanded_project(&self) -> Option<&Project> {
        self.navigation
            .expanded_project
            .and_then(|idx| self.portfolio.projects.get(idx))
    }

    /// Check if any modal layer (lightbox, menu, popup) is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Close all modal layers
    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    /// Show a toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
