//! Portfolio Model
//!
//! The studio and its projects. This is immutable static configuration:
//! built once at startup from the portfolio file (or the built-in sample)
//! and never mutated. Gallery structure is derived from the slide lists on
//! demand, never stored.

use crate::logic::organize::{self, GallerySection};
use crate::LayoutStrategy;

/// Studio identity shown in the hero bar, footer and popups
#[derive(Clone, Debug)]
pub struct Studio {
    pub name: String,
    pub tagline: String,
    pub owner: String,
    pub location: String,
    pub email: String,
    pub socials: Vec<String>,
    pub philosophy: String,
}

/// One portfolio project
#[derive(Clone, Debug)]
pub struct Project {
    pub id: String,
    /// Display number ("01", "02", ...)
    pub number: String,
    pub title: String,
    pub category: String,
    pub year: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Cover image shown when the project has no slides
    pub cover: String,
    /// Unordered slide asset paths; ordering is inferred from filenames
    pub slides: Vec<String>,
    pub strategy: LayoutStrategy,
}

impl Project {
    pub fn has_slides(&self) -> bool {
        !self.slides.is_empty()
    }

    /// Build the layout-ready gallery for this project
    ///
    /// Recomputed per render from the slide list; cheap for the few dozen
    /// paths a project carries.
    pub fn gallery(&self, cols: usize) -> Vec<GallerySection> {
        organize::build_gallery(&self.slides, self.strategy, cols)
    }
}

/// The studio and its project list
#[derive(Clone, Debug)]
pub struct PortfolioModel {
    pub studio: Studio,
    pub projects: Vec<Project>,
}

impl PortfolioModel {
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::organize::flatten;

    fn project_with_slides(slides: &[&str], strategy: LayoutStrategy) -> Project {
        Project {
            id: "p1".to_string(),
            number: "01".to_string(),
            title: "Test".to_string(),
            category: "Brand Identity".to_string(),
            year: "2024".to_string(),
            description: "".to_string(),
            tags: vec![],
            cover: "/x/cover.jpg".to_string(),
            slides: slides.iter().map(|s| s.to_string()).collect(),
            strategy,
        }
    }

    #[test]
    fn test_gallery_empty_slides_renders_nothing() {
        let project = project_with_slides(&[], LayoutStrategy::FlatGrid);
        assert!(!project.has_slides());
        assert!(project.gallery(4).is_empty());
    }

    #[test]
    fn test_gallery_preserves_every_slide() {
        let project = project_with_slides(
            &["/a/Slide2.jpg", "/a/Slide1.jpg", "/a/logo.png"],
            LayoutStrategy::Sections,
        );
        let sections = project.gallery(3);
        assert_eq!(flatten(&sections).len(), 3);
    }

    #[test]
    fn test_gallery_is_pure() {
        let project = project_with_slides(
            &["/a/Slide2.jpg", "/a/Slide1.jpg"],
            LayoutStrategy::FlatGrid,
        );
        assert_eq!(project.gallery(2), project.gallery(2));
    }
}
