//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - classify: Filename heuristics (slide numbers, category keywords)
//! - organize: Grouping classified slides into layout-ready sections
//! - lightbox: Wrap-around index math for the image viewer
//! - navigation: Selection and grid cursor calculations
//! - layout: UI layout calculations and constraints
//! - formatting: Width-aware text formatting for fixed panes

pub mod classify;
pub mod formatting;
pub mod layout;
pub mod lightbox;
pub mod navigation;
pub mod organize;
