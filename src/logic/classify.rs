//! Filename classification heuristics
//!
//! Slide assets carry loose naming conventions ("LogoShowcaseSlide3.jpg",
//! "PatternSlide7.jpg", "inception.jpg"). These functions sniff a slide
//! number and a content category out of the name so the organizer can order
//! and group cells. Classification is a cosmetic hint: a wrong guess only
//! moves a tile, it never drops one.

/// Fallback slide numbers start here so unclassified names always sort
/// after explicitly numbered slides.
pub const FALLBACK_SLIDE_BASE: u32 = 900;

/// Content category inferred from a filename keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Showcase,
    Logo,
    Typography,
    Color,
    Pattern,
    Poster,
    Web,
    Print,
}

/// Keyword table, first match wins. Order matters: "LogoShowcaseSlide3"
/// must classify as Logo, not Showcase.
const KEYWORDS: &[(&str, Category)] = &[
    ("logo", Category::Logo),
    ("typography", Category::Typography),
    ("palette", Category::Color),
    ("color", Category::Color),
    ("pattern", Category::Pattern),
    ("poster", Category::Poster),
    ("plakat", Category::Poster),
    ("website", Category::Web),
    ("web", Category::Web),
    ("banner", Category::Print),
    ("baner", Category::Print),
    ("etykieta", Category::Print),
];

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Showcase => "Showcase",
            Category::Logo => "Logos",
            Category::Typography => "Typography",
            Category::Color => "Color",
            Category::Pattern => "Patterns",
            Category::Poster => "Posters",
            Category::Web => "Web",
            Category::Print => "Print",
        }
    }

    /// Fixed ordering used by the sections layout strategy
    pub fn section_priority(&self) -> u8 {
        match self {
            Category::Showcase => 0,
            Category::Logo => 1,
            Category::Typography => 2,
            Category::Color => 3,
            Category::Pattern => 4,
            Category::Poster => 5,
            Category::Web => 6,
            Category::Print => 7,
        }
    }
}

/// One slide with its inferred placement metadata
///
/// Derived from the file path on every rebuild, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Relative asset path as configured
    pub path: String,
    /// Parsed `Slide<n>` number, or a fallback counter value
    pub slide_number: u32,
    /// Keyword-derived category (Showcase when nothing matches)
    pub category: Category,
    /// Position in the configured slide list (stable-sort tiebreaker)
    pub input_index: usize,
}

impl GalleryItem {
    /// Filename stem for display (no directories, no extension)
    pub fn display_name(&self) -> &str {
        let name = filename(&self.path);
        match name.rfind('.') {
            Some(dot) if dot > 0 => &name[..dot],
            _ => name,
        }
    }
}

/// Final path component
fn filename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extract the number from a case-insensitive `Slide<n>` substring
///
/// # Examples
/// ```
/// use foliotui::logic::classify::parse_slide_number;
///
/// assert_eq!(parse_slide_number("AlpineXSlide1.jpg"), Some(1));
/// assert_eq!(parse_slide_number("TypographySlide4.jpg"), Some(4));
/// assert_eq!(parse_slide_number("firstslidebranidentiy.jpg"), None); // no digits after "slide"
/// assert_eq!(parse_slide_number("logo-modern.png"), None);
/// ```
pub fn parse_slide_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let mut search_from = 0;
    while let Some(pos) = lower[search_from..].find("slide") {
        let digits_start = search_from + pos + "slide".len();
        let digits: String = lower[digits_start..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if !digits.is_empty() {
            // Numbers this size never occur in practice; ignore garbage
            if let Ok(n) = digits.parse::<u32>() {
                return Some(n);
            }
        }
        search_from = digits_start;
    }
    None
}

/// Infer a content category from filename keywords (first match wins)
///
/// Names with no recognizable keyword get the default `Showcase` category
/// rather than being omitted.
pub fn infer_category(name: &str) -> Category {
    let lower = name.to_lowercase();
    for (keyword, category) in KEYWORDS {
        if lower.contains(keyword) {
            return *category;
        }
    }
    Category::Showcase
}

/// Classify a slide list into gallery items
///
/// Unnumbered names receive fallback numbers 900, 901, ... in input order so
/// they sort deterministically after every numbered slide.
pub fn classify_slides(paths: &[String]) -> Vec<GalleryItem> {
    let mut fallback = FALLBACK_SLIDE_BASE;

    paths
        .iter()
        .enumerate()
        .map(|(input_index, path)| {
            let name = filename(path);
            let slide_number = match parse_slide_number(name) {
                Some(n) => n,
                None => {
                    let n = fallback;
                    fallback += 1;
                    n
                }
            };

            GalleryItem {
                path: path.clone(),
                slide_number,
                category: infer_category(name),
                input_index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slide_number_basic() {
        assert_eq!(parse_slide_number("AlpineXSlide1.jpg"), Some(1));
        assert_eq!(parse_slide_number("ColorPaletteSlide5.jpg"), Some(5));
        assert_eq!(parse_slide_number("Matchday2Slide6.jpg"), Some(6));
    }

    #[test]
    fn test_parse_slide_number_case_insensitive() {
        assert_eq!(parse_slide_number("SLIDE12.png"), Some(12));
        assert_eq!(parse_slide_number("slide3.jpg"), Some(3));
    }

    #[test]
    fn test_parse_slide_number_requires_digits() {
        // "slide" with no trailing digits is not a slide marker
        assert_eq!(parse_slide_number("firstslidebranidentiy.jpg"), None);
        assert_eq!(parse_slide_number("logo-minlime.png"), None);
    }

    #[test]
    fn test_parse_slide_number_skips_bare_marker() {
        // First "slide" has no digits, second one does
        assert_eq!(parse_slide_number("slideshow-Slide7.jpg"), Some(7));
    }

    #[test]
    fn test_infer_category_first_match_wins() {
        // Contains both "logo" and "slide"-ish showcase text
        assert_eq!(infer_category("LogoShowcaseSlide3.jpg"), Category::Logo);
        assert_eq!(infer_category("TypographySlide4.jpg"), Category::Typography);
        assert_eq!(infer_category("ColorPaletteSlide5.jpg"), Category::Color);
    }

    #[test]
    fn test_infer_category_default() {
        assert_eq!(infer_category("inception.jpg"), Category::Showcase);
        assert_eq!(infer_category("Component 1.jpg"), Category::Showcase);
    }

    #[test]
    fn test_infer_category_localized_keywords() {
        assert_eq!(infer_category("MohitoPoster.jpg"), Category::Poster);
        assert_eq!(infer_category("Plakatkawiarnia2.png"), Category::Poster);
        assert_eq!(infer_category("BanerCanVer2.jpg"), Category::Print);
    }

    #[test]
    fn test_classify_slides_fallback_counter() {
        let paths = vec![
            "a/Slide2.jpg".to_string(),
            "a/cover.png".to_string(),
            "a/extra.png".to_string(),
        ];
        let items = classify_slides(&paths);

        assert_eq!(items[0].slide_number, 2);
        assert_eq!(items[1].slide_number, 900);
        assert_eq!(items[2].slide_number, 901);
    }

    #[test]
    fn test_classify_slides_keeps_input_index() {
        let paths = vec!["x/Slide9.jpg".to_string(), "x/Slide1.jpg".to_string()];
        let items = classify_slides(&paths);

        // Classification never reorders; sorting is the organizer's job
        assert_eq!(items[0].input_index, 0);
        assert_eq!(items[0].slide_number, 9);
        assert_eq!(items[1].input_index, 1);
        assert_eq!(items[1].slide_number, 1);
    }

    #[test]
    fn test_classify_slides_empty() {
        let items = classify_slides(&[]);
        assert!(items.is_empty());
    }

    #[test]
    fn test_display_name_strips_dirs_and_extension() {
        let item = GalleryItem {
            path: "/Posters/inception.jpg".to_string(),
            slide_number: 900,
            category: Category::Showcase,
            input_index: 0,
        };
        assert_eq!(item.display_name(), "inception");
    }
}
