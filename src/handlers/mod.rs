//! Event Handlers
//!
//! Keyboard input is the only event source besides terminal resize, which
//! the run loop handles inline. Dispatch is modal-first: whichever layer is
//! on top (lightbox, popup, menu) consumes the key before the main view
//! sees it, mirroring how each overlay owns the keyboard while open.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
