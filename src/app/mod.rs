//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in src/model/)
//! - Logic (pure business logic in src/logic/)
//! - Handlers (in src/handlers/)
//! - UI rendering (in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod lightbox;
pub(crate) mod navigation;
