//! Slide organizer
//!
//! Pure functions that turn a classified slide list into layout-ready
//! sections and rows. Everything here is deterministic for a given input:
//! the sort is stable and section order follows a fixed priority table, so
//! the flattened order the lightbox navigates never shifts between renders.

use crate::logic::classify::{classify_slides, GalleryItem};
use crate::LayoutStrategy;

/// One renderable group of gallery rows
///
/// Untitled for the flat and paired strategies; the sections strategy emits
/// one titled group per category present in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySection {
    pub title: Option<String>,
    /// Rows of cells. A row's cells share its width equally, so a leftover
    /// singleton row renders full-width on its own.
    pub rows: Vec<Vec<GalleryItem>>,
}

/// Sort items ascending by inferred slide number
///
/// The sort must be stable: same-numbered slides keep their input order
/// (`Vec::sort_by_key` guarantees this).
pub fn sort_by_slide_number(items: &mut [GalleryItem]) {
    items.sort_by_key(|item| item.slide_number);
}

/// Group sorted items according to the layout strategy
///
/// `cols` is the grid column count the renderer has room for (at least 1).
/// Every input item appears in exactly one row of exactly one section.
pub fn organize(items: &[GalleryItem], strategy: LayoutStrategy, cols: usize) -> Vec<GallerySection> {
    if items.is_empty() {
        return Vec::new();
    }
    let cols = cols.max(1);

    match strategy {
        LayoutStrategy::FlatGrid => vec![GallerySection {
            title: None,
            rows: chunk_rows(items, cols),
        }],
        LayoutStrategy::PairedRows => vec![GallerySection {
            title: None,
            rows: pair_rows(items),
        }],
        LayoutStrategy::Sections => bucket_sections(items, cols),
    }
}

/// Classify, sort and group a raw slide list in one step
pub fn build_gallery(paths: &[String], strategy: LayoutStrategy, cols: usize) -> Vec<GallerySection> {
    let mut items = classify_slides(paths);
    sort_by_slide_number(&mut items);
    organize(&items, strategy, cols)
}

/// Flatten sections back into the navigable item sequence
///
/// This is the order the lightbox steps through; its length always equals
/// the input slide count.
pub fn flatten(sections: &[GallerySection]) -> Vec<GalleryItem> {
    sections
        .iter()
        .flat_map(|section| section.rows.iter())
        .flat_map(|row| row.iter().cloned())
        .collect()
}

/// Chunk a flat sequence into rows of up to `cols` cells
fn chunk_rows(items: &[GalleryItem], cols: usize) -> Vec<Vec<GalleryItem>> {
    items.chunks(cols).map(|chunk| chunk.to_vec()).collect()
}

/// Pair adjacent same-category items into 2-up rows
///
/// A run of mixed categories degrades to single-cell rows; a trailing
/// unpaired item gets its own full-width row.
fn pair_rows(items: &[GalleryItem]) -> Vec<Vec<GalleryItem>> {
    let mut rows = Vec::new();
    let mut i = 0;

    while i < items.len() {
        if i + 1 < items.len() && items[i].category == items[i + 1].category {
            rows.push(vec![items[i].clone(), items[i + 1].clone()]);
            i += 2;
        } else {
            rows.push(vec![items[i].clone()]);
            i += 1;
        }
    }

    rows
}

/// Bucket items into titled category sections ordered by section priority
fn bucket_sections(items: &[GalleryItem], cols: usize) -> Vec<GallerySection> {
    // Buckets keyed by first appearance, then reordered by the fixed
    // priority table. No HashMap: iteration order must be deterministic.
    let mut buckets: Vec<(crate::logic::classify::Category, Vec<GalleryItem>)> = Vec::new();

    for item in items {
        match buckets.iter_mut().find(|(cat, _)| *cat == item.category) {
            Some((_, bucket)) => bucket.push(item.clone()),
            None => buckets.push((item.category, vec![item.clone()])),
        }
    }

    buckets.sort_by_key(|(cat, _)| cat.section_priority());

    buckets
        .into_iter()
        .map(|(category, bucket)| GallerySection {
            title: Some(category.as_str().to_string()),
            rows: chunk_rows(&bucket, cols),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classify::Category;

    fn make_item(path: &str, number: u32, category: Category, index: usize) -> GalleryItem {
        GalleryItem {
            path: path.to_string(),
            slide_number: number,
            category,
            input_index: index,
        }
    }

    fn paths(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sort_is_stable_for_equal_numbers() {
        let mut items = vec![
            make_item("a/VicotrySlide8.jpg", 8, Category::Showcase, 0),
            make_item("a/DefeatSlide8.jpg", 8, Category::Showcase, 1),
            make_item("a/Slide1.jpg", 1, Category::Showcase, 2),
        ];
        sort_by_slide_number(&mut items);

        assert_eq!(items[0].path, "a/Slide1.jpg");
        assert_eq!(items[1].path, "a/VicotrySlide8.jpg");
        assert_eq!(items[2].path, "a/DefeatSlide8.jpg");
    }

    #[test]
    fn test_numeric_sort_scenario() {
        // Logo1 has no Slide<n> marker, gets a synthetic high number, sorts last
        let sections = build_gallery(
            &paths(&["a/Logo1.png", "a/Slide3.jpg", "a/Slide1.jpg"]),
            LayoutStrategy::FlatGrid,
            4,
        );
        let flat = flatten(&sections);

        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].path, "a/Slide1.jpg");
        assert_eq!(flat[1].path, "a/Slide3.jpg");
        assert_eq!(flat[2].path, "a/Logo1.png");
    }

    #[test]
    fn test_flat_grid_chunks_rows() {
        let sections = build_gallery(
            &paths(&["a/Slide1.jpg", "a/Slide2.jpg", "a/Slide3.jpg", "a/Slide4.jpg", "a/Slide5.jpg"]),
            LayoutStrategy::FlatGrid,
            2,
        );

        assert_eq!(sections.len(), 1);
        assert!(sections[0].title.is_none());
        let row_lens: Vec<usize> = sections[0].rows.iter().map(|r| r.len()).collect();
        assert_eq!(row_lens, vec![2, 2, 1]);
    }

    #[test]
    fn test_paired_rows_pairs_same_category() {
        let items = vec![
            make_item("p/LewyPoster.jpg", 900, Category::Poster, 0),
            make_item("p/inceptionPoster.jpg", 901, Category::Poster, 1),
            make_item("p/logo.png", 902, Category::Logo, 2),
        ];
        let sections = organize(&items, LayoutStrategy::PairedRows, 4);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].rows.len(), 2);
        assert_eq!(sections[0].rows[0].len(), 2); // poster pair
        assert_eq!(sections[0].rows[1].len(), 1); // leftover singleton
    }

    #[test]
    fn test_paired_rows_mixed_run_stays_single() {
        let items = vec![
            make_item("a.png", 900, Category::Logo, 0),
            make_item("b.png", 901, Category::Poster, 1),
            make_item("c.png", 902, Category::Logo, 2),
        ];
        let sections = organize(&items, LayoutStrategy::PairedRows, 4);

        let row_lens: Vec<usize> = sections[0].rows.iter().map(|r| r.len()).collect();
        assert_eq!(row_lens, vec![1, 1, 1]);
    }

    #[test]
    fn test_sections_ordered_by_priority() {
        let items = vec![
            make_item("PosterA.jpg", 900, Category::Poster, 0),
            make_item("logoB.png", 901, Category::Logo, 1),
            make_item("PosterC.jpg", 902, Category::Poster, 2),
        ];
        let sections = organize(&items, LayoutStrategy::Sections, 3);

        // Logo has higher section priority than Poster regardless of input order
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title.as_deref(), Some("Logos"));
        assert_eq!(sections[1].title.as_deref(), Some("Posters"));
        assert_eq!(sections[1].rows[0].len(), 2);
    }

    #[test]
    fn test_flatten_preserves_count_across_strategies() {
        let input = paths(&[
            "/AlpineX/AlpineXSlide1.jpg",
            "/AlpineX/ShowcaseSlide2.jpg",
            "/AlpineX/LogoShowcaseSlide3.jpg",
            "/AlpineX/TypographySlide4.jpg",
            "/AlpineX/PatternSlide7.jpg",
            "/AlpineX/Pattern2Slide7.jpg",
            "/AlpineX/BlackWhiteLogoSlide9.jpg",
        ]);

        for strategy in [
            LayoutStrategy::FlatGrid,
            LayoutStrategy::PairedRows,
            LayoutStrategy::Sections,
        ] {
            for cols in 1..=5 {
                let sections = build_gallery(&input, strategy, cols);
                assert_eq!(
                    flatten(&sections).len(),
                    input.len(),
                    "dropped or duplicated items: {:?} cols={}",
                    strategy,
                    cols
                );
            }
        }
    }

    #[test]
    fn test_organize_empty_input() {
        for strategy in [
            LayoutStrategy::FlatGrid,
            LayoutStrategy::PairedRows,
            LayoutStrategy::Sections,
        ] {
            assert!(organize(&[], strategy, 4).is_empty());
        }
    }

    #[test]
    fn test_organize_deterministic() {
        let input = paths(&["x/Slide2.jpg", "x/logo.png", "x/Slide1.jpg", "x/poster.jpg"]);
        let first = build_gallery(&input, LayoutStrategy::Sections, 2);
        let second = build_gallery(&input, LayoutStrategy::Sections, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_cols_clamped_to_one() {
        let sections = build_gallery(&paths(&["a/Slide1.jpg"]), LayoutStrategy::FlatGrid, 0);
        assert_eq!(sections[0].rows.len(), 1);
        assert_eq!(sections[0].rows[0].len(), 1);
    }
}
