//! Tests for portfolio configuration loading
//!
//! A portfolio YAML file drives everything the UI shows: studio identity,
//! project rows, and per-project gallery strategy. These tests parse a
//! realistic file end-to-end into the model and check the derived gallery,
//! so a schema regression shows up here before it shows up on screen.

use foliotui::config::Config;
use foliotui::logic::organize::flatten;
use foliotui::model::Model;
use foliotui::LayoutStrategy;

const SAMPLE_YAML: &str = r#"
studio:
  name: "NORTHPINE."
  tagline: "Design studio"
  owner: "J. Kowalski"
  location: "Gdansk, PL"
  email: "hello@northpine.example"
  socials:
    - Instagram
    - LinkedIn
  philosophy: "Less, but better."
vim_mode: true
projects:
  - id: brand
    number: "01"
    title: Brand System
    category: Brand Identity
    year: "2025"
    description: Identity work across print and digital.
    tags: [Branding, Identity]
    cover: /Brand/Slide1.jpg
    slides:
      - /Brand/LogoShowcaseSlide3.jpg
      - /Brand/Slide1.jpg
      - /Brand/TypographySlide4.jpg
    strategy: sections
  - id: posters
    number: "02"
    title: Posters
    category: Poster Design
    year: "2025"
    cover: /Posters/a.jpg
    slides:
      - /Posters/PlakatA.jpg
      - /Posters/PlakatB.jpg
    strategy: paired-rows
"#;

#[test]
fn test_parse_full_portfolio() {
    let config: Config = serde_yaml::from_str(SAMPLE_YAML).unwrap();
    assert!(config.vim_mode);
    assert_eq!(config.studio.socials.len(), 2);

    let portfolio = config.into_portfolio();
    assert_eq!(portfolio.project_count(), 2);
    assert_eq!(portfolio.studio.name, "NORTHPINE.");
    assert_eq!(portfolio.projects[0].strategy, LayoutStrategy::Sections);
    assert_eq!(portfolio.projects[1].strategy, LayoutStrategy::PairedRows);
}

#[test]
fn test_parsed_project_builds_ordered_gallery() {
    let config: Config = serde_yaml::from_str(SAMPLE_YAML).unwrap();
    let portfolio = config.into_portfolio();

    let sections = portfolio.projects[0].gallery(3);
    let flat = flatten(&sections);

    // Numbered slides sort by slide number regardless of YAML order
    assert_eq!(flat.len(), 3);
    assert_eq!(flat[0].path, "/Brand/Slide1.jpg");

    // Sections strategy yields titled groups
    assert!(sections.iter().all(|s| s.title.is_some()));
}

#[test]
fn test_model_from_parsed_config() {
    let config: Config = serde_yaml::from_str(SAMPLE_YAML).unwrap();
    let vim = config.vim_mode;
    let model = Model::new(config.into_portfolio(), vim);

    assert!(model.ui.vim_mode);
    assert_eq!(model.navigation.selected_project, 0);
    assert_eq!(model.selected_project().unwrap().id, "brand");
}

#[test]
fn test_paired_posters_share_rows() {
    let config: Config = serde_yaml::from_str(SAMPLE_YAML).unwrap();
    let portfolio = config.into_portfolio();

    // Both poster slides classify as Poster, so they pair into one 2-up row
    let sections = portfolio.projects[1].gallery(4);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].rows.len(), 1);
    assert_eq!(sections[0].rows[0].len(), 2);
}

#[test]
fn test_builtin_sample_galleries_are_complete() {
    let portfolio = Config::builtin().into_portfolio();

    for project in &portfolio.projects {
        let flat = flatten(&project.gallery(4));
        assert_eq!(
            flat.len(),
            project.slides.len(),
            "project {} dropped slides",
            project.id
        );
    }
}
