//! Shared model types: lightbox, menu and popup state.

use crate::logic::classify::GalleryItem;
use crate::logic::lightbox;

/// Open lightbox state
///
/// Holds a snapshot of the flattened gallery order so navigation stays
/// stable while the viewer is open. Exists only while open: the UI model
/// stores `Option<LightboxState>` and dismissal drops it.
#[derive(Clone, Debug)]
pub struct LightboxState {
    /// Index into `items`, always within `[0, items.len())`
    pub index: usize,
    /// Flattened gallery order being viewed
    pub items: Vec<GalleryItem>,
}

impl LightboxState {
    /// Open on the requested item, clamping a stray index into bounds
    pub fn open(items: Vec<GalleryItem>, index: usize) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            index: lightbox::clamp_open_index(index, items.len()),
            items,
        })
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// The item currently on screen
    pub fn current(&self) -> &GalleryItem {
        &self.items[self.index]
    }

    /// Advance with wrap-around
    pub fn next(&mut self) {
        self.index = lightbox::next_index(self.index, self.count());
    }

    /// Retreat with wrap-around
    pub fn prev(&mut self) {
        self.index = lightbox::prev_index(self.index, self.count());
    }
}

/// Entries of the slide-out menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Home,
    Work,
    About,
    Contact,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::Home,
        MenuEntry::Work,
        MenuEntry::About,
        MenuEntry::Contact,
    ];

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Home => "Home",
            MenuEntry::Work => "Work",
            MenuEntry::About => "About",
            MenuEntry::Contact => "Contact",
        }
    }
}

/// Open slide-out menu state
#[derive(Clone, Debug, Default)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(MenuEntry::ALL.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn entry(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected]
    }
}

/// Centered info popups reachable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPopup {
    About,
    Contact,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classify::classify_slides;

    fn items(n: usize) -> Vec<GalleryItem> {
        let paths: Vec<String> = (1..=n).map(|i| format!("x/Slide{}.jpg", i)).collect();
        classify_slides(&paths)
    }

    #[test]
    fn test_lightbox_open_empty_list() {
        assert!(LightboxState::open(Vec::new(), 0).is_none());
    }

    #[test]
    fn test_lightbox_open_clamps_index() {
        let state = LightboxState::open(items(3), 99).unwrap();
        assert_eq!(state.index, 2);
    }

    #[test]
    fn test_lightbox_next_four_times_returns_to_start() {
        let mut state = LightboxState::open(items(4), 0).unwrap();
        for _ in 0..4 {
            state.next();
        }
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_lightbox_prev_wraps() {
        let mut state = LightboxState::open(items(4), 0).unwrap();
        state.prev();
        assert_eq!(state.index, 3);
    }

    #[test]
    fn test_lightbox_single_item_noop() {
        let mut state = LightboxState::open(items(1), 0).unwrap();
        state.next();
        assert_eq!(state.index, 0);
        state.prev();
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_menu_selection_clamps() {
        let mut menu = MenuState::new();
        menu.select_prev();
        assert_eq!(menu.selected, 0);

        for _ in 0..10 {
            menu.select_next();
        }
        assert_eq!(menu.selected, MenuEntry::ALL.len() - 1);
        assert_eq!(menu.entry(), MenuEntry::Contact);
    }
}
