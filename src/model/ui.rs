//! UI Model
//!
//! State for the modal layers (menu, popups, lightbox), the toast, and
//! visual flags like the compact breakpoint.

use std::time::Instant;

use super::types::{InfoPopup, LightboxState, MenuState};

/// Toast lifetime before auto-dismissal
const TOAST_DURATION_MS: u128 = 1500;

/// Modal layers and visual flags
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Slide-out menu (open while Some)
    pub menu: Option<MenuState>,

    /// About / Contact popup (open while Some)
    pub popup: Option<InfoPopup>,

    /// Full-screen image viewer (open while Some)
    pub lightbox: Option<LightboxState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Compact stacked layout, toggled by terminal resize
    pub compact: bool,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model
    pub fn new(vim_mode: bool) -> Self {
        Self {
            menu: None,
            popup: None,
            lightbox: None,
            toast_message: None,
            compact: false,
            vim_mode,
            should_quit: false,
        }
    }

    /// Check if any modal layer is currently showing
    pub fn has_modal(&self) -> bool {
        self.menu.is_some() || self.popup.is_some() || self.lightbox.is_some()
    }

    /// Close all modal layers
    pub fn close_all_modals(&mut self) {
        self.menu = None;
        self.popup = None;
        self.lightbox = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if the toast has outlived its display time
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => timestamp.elapsed().as_millis() >= TOAST_DURATION_MS,
            None => false,
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert!(!model.has_modal());
        assert!(!model.compact);
        assert!(!model.vim_mode);
        assert!(!model.should_quit);
    }

    #[test]
    fn test_has_modal_each_layer() {
        let mut model = UiModel::new(false);

        model.menu = Some(MenuState::new());
        assert!(model.has_modal());
        model.menu = None;

        model.popup = Some(InfoPopup::About);
        assert!(model.has_modal());
        model.popup = None;

        assert!(!model.has_modal());
    }

    #[test]
    fn test_close_all_modals() {
        let mut model = UiModel::new(false);
        model.menu = Some(MenuState::new());
        model.popup = Some(InfoPopup::Contact);

        model.close_all_modals();
        assert!(!model.has_modal());
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        assert!(model.toast_message.is_none());
        assert!(!model.should_dismiss_toast());

        model.show_toast("Test".to_string());
        assert!(model.toast_message.is_some());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }

    #[test]
    fn test_ui_model_is_cloneable() {
        let model = UiModel::new(true);
        let _cloned = model.clone();
    }
}
