// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (hero, panes, legend, footer)
// - render: Main orchestration function that coordinates all rendering
// - hero: Renders the top studio identity bar
// - project_list: Renders the left project accordion
// - gallery: Renders the right pane (project overview or slide gallery)
// - lightbox: Renders the full-screen slide viewer
// - menu: Renders the slide-out menu overlay
// - dialogs: Renders the About / Contact popups
// - footer: Renders the bottom contact footer
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod legend;
pub mod lightbox;
pub mod menu;
pub mod project_list;
pub mod render;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
