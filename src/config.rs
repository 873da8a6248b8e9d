//! Portfolio configuration
//!
//! The portfolio is static data: studio identity plus a project list with
//! slide asset paths. It is read from a YAML file when one is given (or
//! found in the config directory), otherwise the built-in sample portfolio
//! is used so the binary runs standalone.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::model::{PortfolioModel, Project, Studio};
use crate::LayoutStrategy;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub studio: StudioConfig,
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    /// Root directory slide paths are resolved against
    #[serde(default)]
    pub asset_root: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StudioConfig {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub socials: Vec<String>,
    #[serde(default)]
    pub philosophy: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    pub id: String,
    pub number: String,
    pub title: String,
    pub category: String,
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover: String,
    #[serde(default)]
    pub slides: Vec<String>,
    #[serde(default = "default_strategy")]
    pub strategy: LayoutStrategy,
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

fn default_strategy() -> LayoutStrategy {
    LayoutStrategy::FlatGrid
}

impl Config {
    /// Load and parse a portfolio file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read portfolio file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid portfolio file {}", path.display()))?;
        Ok(config)
    }

    /// Convert parsed configuration into the immutable portfolio model
    pub fn into_portfolio(self) -> PortfolioModel {
        PortfolioModel {
            studio: Studio {
                name: self.studio.name,
                tagline: self.studio.tagline,
                owner: self.studio.owner,
                location: self.studio.location,
                email: self.studio.email,
                socials: self.studio.socials,
                philosophy: self.studio.philosophy,
            },
            projects: self
                .projects
                .into_iter()
                .map(|p| Project {
                    id: p.id,
                    number: p.number,
                    title: p.title,
                    category: p.category,
                    year: p.year,
                    description: p.description,
                    tags: p.tags,
                    cover: p.cover,
                    slides: p.slides,
                    strategy: p.strategy,
                })
                .collect(),
        }
    }

    /// The built-in sample portfolio
    ///
    /// Used when no portfolio file exists, so the program always has
    /// something to show.
    pub fn builtin() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        #[allow(clippy::too_many_arguments)]
        fn project(
            id: &str,
            number: &str,
            title: &str,
            category: &str,
            description: &str,
            tags: &[&str],
            cover: &str,
            slides: &[&str],
            strategy: LayoutStrategy,
        ) -> ProjectConfig {
            ProjectConfig {
                id: id.to_string(),
                number: number.to_string(),
                title: title.to_string(),
                category: category.to_string(),
                year: "2024".to_string(),
                description: description.to_string(),
                tags: strings(tags),
                cover: cover.to_string(),
                slides: strings(slides),
                strategy,
            }
        }

        Config {
            studio: StudioConfig {
                name: "ALPISKETCH.".to_string(),
                tagline: "Design studio — brand identity, posters, web".to_string(),
                owner: "Aleksander Pietrzak".to_string(),
                location: "Warsaw, PL".to_string(),
                email: "sketchalpi@gmail.com".to_string(),
                socials: strings(&["Instagram", "Twitter / X", "LinkedIn"]),
                philosophy: "Simplicity is the ultimate sophistication. It is not about \
                             lack of content, but about the abundance of clarity."
                    .to_string(),
            },
            projects: vec![
                project(
                    "p1",
                    "01",
                    "AlpineX",
                    "Esport Brand Identity",
                    "A complete esport brand identity system for AlpineX, showcasing dynamic \
                     visual language and competitive gaming aesthetics.",
                    &["Branding", "Esport", "Identity"],
                    "/AlpineXEsportIdentity/AlpineXSlide1.jpg",
                    &[
                        "/AlpineXEsportIdentity/AlpineXSlide1.jpg",
                        "/AlpineXEsportIdentity/ShowcaseSlide2.jpg",
                        "/AlpineXEsportIdentity/LogoShowcaseSlide3.jpg",
                        "/AlpineXEsportIdentity/TypographySlide4.jpg",
                        "/AlpineXEsportIdentity/ColorPaletteSlide5.jpg",
                        "/AlpineXEsportIdentity/MatchdaySlide6.jpg",
                        "/AlpineXEsportIdentity/Matchday2Slide6.jpg",
                        "/AlpineXEsportIdentity/PatternSlide7.jpg",
                        "/AlpineXEsportIdentity/Pattern2Slide7.jpg",
                        "/AlpineXEsportIdentity/VicotrySlide8.jpg",
                        "/AlpineXEsportIdentity/DefeatSlide8.jpg",
                        "/AlpineXEsportIdentity/BlackWhiteLogoSlide9.jpg",
                    ],
                    LayoutStrategy::FlatGrid,
                ),
                project(
                    "p2",
                    "02",
                    "Minlime",
                    "Brand Identity",
                    "A complete brand identity system showcasing cohesive visual language \
                     across digital and physical touchpoints.",
                    &["Branding", "Web Design", "Print"],
                    "/Minlime/firstslidebranidentiy.jpg",
                    &[
                        "/Minlime/MinlimeWebsiteV2.png",
                        "/Minlime/BanerCanVer2.jpg",
                        "/Minlime/MohitoPoster.jpg",
                        "/Minlime/Poster_V2_upgraded.jpg",
                        "/Minlime/BUSSTOPposterPresenting.jpg",
                        "/Minlime/logo-minlime.png",
                        "/Minlime/logo-modern.png",
                    ],
                    LayoutStrategy::Sections,
                ),
                project(
                    "p3",
                    "03",
                    "Logo",
                    "Logo Design",
                    "A curated collection of logo designs showcasing versatility across \
                     different brand identities and styles.",
                    &["Branding", "Identity", "Design"],
                    "/Logos/logo-modern.png",
                    &[
                        "/Logos/Alpisketchlogo.png",
                        "/Logos/Cosmorea-Logo.png",
                        "/Logos/logo-modern.png",
                        "/Logos/RytmLogoWITHBAGROUND.png",
                        "/Logos/AlpisketchElegantNOBG.png",
                        "/Logos/black-cosmica-modern.png",
                        "/Logos/CardemaLogovintage.png",
                        "/Logos/Citrushublogo.png",
                        "/Logos/FlowdaySUn.png",
                        "/Logos/logo-minlime.png",
                        "/Logos/LOGO1FLAT.png",
                    ],
                    LayoutStrategy::FlatGrid,
                ),
                project(
                    "p4",
                    "04",
                    "Posters",
                    "Poster Design",
                    "A curated collection of poster designs exploring cinematic and \
                     conceptual themes with bold typography and visual storytelling.",
                    &["Poster", "Typography", "Visual"],
                    "/Posters/inception.jpg",
                    &[
                        "/Posters/BrabusX-1.0.jpg",
                        "/Posters/LewyPoster.jpg",
                        "/Posters/Plakatkawiarnia2podglad.png",
                        "/Posters/ShutterISLAND_2.0.jpg",
                        "/Posters/brutalit-v2-resize.jpg",
                        "/Posters/inception.jpg",
                        "/Posters/kawafajnaResize.jpg",
                        "/Posters/projektVINCI_V2_resize.jpg",
                    ],
                    LayoutStrategy::PairedRows,
                ),
                project(
                    "p5",
                    "05",
                    "Website Design",
                    "Web Design",
                    "Modern and responsive website designs showcasing clean interfaces and \
                     user-focused experiences.",
                    &["Web Design", "UI/UX", "Digital"],
                    "/Website design/Component 1.jpg",
                    &[
                        "/Website design/Component 1.jpg",
                        "/Website design/Group 10CHOOOROSONOS.png",
                    ],
                    LayoutStrategy::PairedRows,
                ),
                project(
                    "p6",
                    "06",
                    "Other Works",
                    "Mixed Media",
                    "A diverse collection of design projects including packaging, labels, \
                     and digital artworks showcasing creative versatility.",
                    &["Packaging", "Label", "Digital"],
                    "/Other/bg-stream-offl.jpg",
                    &[
                        "/Other/bg-stream-offl.jpg",
                        "/Other/bloki-stream.jpg",
                        "/Other/czekolada_2_etykieta_podglad.png",
                        "/Other/czekolada_etykieta_podglad1.png",
                    ],
                    LayoutStrategy::PairedRows,
                ),
            ],
            vim_mode: false,
            image_preview_enabled: true,
            image_protocol: "auto".to_string(),
            asset_root: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_portfolio_shape() {
        let portfolio = Config::builtin().into_portfolio();
        assert_eq!(portfolio.project_count(), 6);
        assert!(portfolio.projects.iter().all(|p| p.has_slides()));
        assert_eq!(portfolio.studio.name, "ALPISKETCH.");
    }

    #[test]
    fn test_builtin_uses_every_strategy() {
        let portfolio = Config::builtin().into_portfolio();
        for strategy in [
            LayoutStrategy::FlatGrid,
            LayoutStrategy::PairedRows,
            LayoutStrategy::Sections,
        ] {
            assert!(
                portfolio.projects.iter().any(|p| p.strategy == strategy),
                "no project uses {:?}",
                strategy
            );
        }
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
studio:
  name: "Studio X"
projects:
  - id: p1
    number: "01"
    title: Demo
    category: Branding
    year: "2025"
    cover: /demo/cover.jpg
    slides:
      - /demo/Slide1.jpg
    strategy: paired-rows
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.vim_mode);
        assert!(config.image_preview_enabled);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].strategy, LayoutStrategy::PairedRows);
    }

    #[test]
    fn test_parse_strategy_default() {
        let yaml = r#"
studio:
  name: "Studio X"
projects:
  - id: p1
    number: "01"
    title: Demo
    category: Branding
    year: "2025"
    cover: /demo/cover.jpg
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.projects[0].strategy, LayoutStrategy::FlatGrid);
        assert!(config.projects[0].slides.is_empty());
    }
}
