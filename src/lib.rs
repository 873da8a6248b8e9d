//! Portfolio TUI Library
//!
//! Exposes the pure modules (data model, classification, grouping and
//! navigation logic) for testing.

pub mod config;
pub mod logic;
pub mod model;

use serde::Deserialize;

/// Gallery layout strategy
///
/// One gallery component, three renderable shapes. Which shape a project
/// uses is configuration, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    FlatGrid,   // Masonry-style grid, one cell per slide
    PairedRows, // Adjacent same-category slides share a 2-up row
    Sections,   // Slides bucketed into named category sections
}

impl LayoutStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            LayoutStrategy::FlatGrid => "Grid",
            LayoutStrategy::PairedRows => "Rows",
            LayoutStrategy::Sections => "Sections",
        }
    }
}
