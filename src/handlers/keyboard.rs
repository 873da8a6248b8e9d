//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.
//! Layers are checked top-down: lightbox, then popup, then menu, then the
//! main view. A key consumed by an upper layer never reaches a lower one.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::model::MenuState;
use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows terminals deliver Release events too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    let vim = app.model.ui.vim_mode;

    // Lightbox consumes everything while open
    if app.model.ui.lightbox.is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.close_lightbox(),
            KeyCode::Left => app.lightbox_prev(),
            KeyCode::Right => app.lightbox_next(),
            KeyCode::Char('h') if vim => app.lightbox_prev(),
            KeyCode::Char('l') if vim => app.lightbox_next(),
            _ => {
                // Ignore other keys while the viewer is showing
            }
        }
        return Ok(());
    }

    // Info popups: any dismissal key closes them
    if app.model.ui.popup.is_some() {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
        ) {
            app.model.ui.popup = None;
        }
        return Ok(());
    }

    // Slide-out menu
    if let Some(menu) = &mut app.model.ui.menu {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => {
                app.model.ui.menu = None;
            }
            KeyCode::Up => menu.select_prev(),
            KeyCode::Down => menu.select_next(),
            KeyCode::Char('k') if vim => menu.select_prev(),
            KeyCode::Char('j') if vim => menu.select_next(),
            KeyCode::Enter => app.activate_menu_entry(),
            _ => {}
        }
        return Ok(());
    }

    // Main view: grid navigation while a project is expanded,
    // list navigation otherwise
    let expanded = app
        .model
        .navigation
        .is_expanded(app.model.navigation.selected_project);

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('m') => {
            app.model.ui.menu = Some(MenuState::new());
        }
        KeyCode::Enter => {
            if expanded {
                app.open_lightbox();
            } else {
                app.toggle_selected_project();
            }
        }
        KeyCode::Esc => {
            if app.model.navigation.expanded_project.is_some() {
                app.model.navigation.collapse();
            }
        }
        KeyCode::Left if expanded => app.grid_cursor_left(),
        KeyCode::Right if expanded => app.grid_cursor_right(),
        KeyCode::Char('h') if vim && expanded => app.grid_cursor_left(),
        KeyCode::Char('l') if vim && expanded => app.grid_cursor_right(),
        KeyCode::Up => {
            if expanded {
                app.grid_cursor_up();
            } else {
                app.select_prev_project();
            }
        }
        KeyCode::Down => {
            if expanded {
                app.grid_cursor_down();
            } else {
                app.select_next_project();
            }
        }
        KeyCode::Char('k') if vim => {
            if expanded {
                app.grid_cursor_up();
            } else {
                app.select_prev_project();
            }
        }
        KeyCode::Char('j') if vim => {
            if expanded {
                app.grid_cursor_down();
            } else {
                app.select_next_project();
            }
        }
        KeyCode::Home => app.select_first_project(),
        KeyCode::End => app.select_last_project(),
        KeyCode::Char('g') if vim && !expanded => app.select_first_project(),
        KeyCode::Char('G') if vim && !expanded => app.select_last_project(),
        _ => {}
    }

    Ok(())
}
