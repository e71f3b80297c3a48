//! HTML site generation.
//!
//! Renders the landing page and writes the final site:
//!
//! ```text
//! dist/
//! ├── index.html     # Page with inlined CSS and reveal runtime
//! └── ...            # Everything under assets/ (favicon, fonts), copied as-is
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base layout (palette injected from config)
//! - `static/reveal.js`: browser side of the reveal contract
//!
//! The `.reveal` / `.reveal.in-view` rules are not in the static sheet. They
//! are derived from the hidden and revealed [`Presentation`]s, so the browser
//! and the headless simulation agree on what each state looks like.

use crate::config::{self, SiteConfig};
use crate::page::{self, PageContext};
use crate::reveal::{Presentation, REVEAL_CLASS, REVEAL_THRESHOLD, RevealState, RevealStyle};
use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/reveal.js");

/// What a build wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub index: PathBuf,
    pub assets_copied: usize,
    pub reveal_blocks: usize,
    pub bytes: usize,
}

/// Hidden and revealed rules for every reveal wrapper.
pub fn reveal_css(style: &RevealStyle) -> String {
    let hidden = Presentation::for_state(RevealState::Hidden, 0, style);
    let revealed = Presentation::for_state(RevealState::Revealed, 0, style);
    format!(
        ".{REVEAL_CLASS} {{ {} }}\n.{REVEAL_CLASS}.in-view {{ {} }}",
        hidden.to_style(),
        revealed.visual_style(),
    )
}

/// Browser runtime with the threshold baked in.
pub fn reveal_script() -> String {
    format!("const REVEAL_THRESHOLD = {REVEAL_THRESHOLD};\n{JS}")
}

/// Theme variables, base layout, reveal rules.
pub fn build_stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_theme_css(config),
        CSS_STATIC,
        reveal_css(&config.reveal)
    )
}

/// Render the page to a string.
pub fn render_index(config: &SiteConfig, year: i32) -> String {
    let css = build_stylesheet(config);
    let script = reveal_script();
    page::render_page(&PageContext {
        config,
        css: &css,
        script: &script,
        year,
    })
    .into_string()
}

/// Write the site to `output_dir`, copying `assets_dir` if it exists.
pub fn generate(
    config: &SiteConfig,
    assets_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let year = chrono::Local::now().year();
    let html = render_index(config, year);
    let index = output_dir.join("index.html");
    fs::write(&index, &html)?;
    info!(path = %index.display(), bytes = html.len(), "wrote page");

    let assets_copied = if assets_dir.is_dir() {
        copy_assets(assets_dir, output_dir)?
    } else {
        debug!(path = %assets_dir.display(), "no assets directory");
        0
    };

    Ok(GenerateReport {
        index,
        assets_copied,
        reveal_blocks: page::reveal_block_count(),
        bytes: html.len(),
    })
}

/// Copy every file under `src` into `dst`, keeping relative paths.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            debug!(asset = %rel.display(), "copied");
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reveal_css_has_hidden_and_revealed_rules() {
        let css = reveal_css(&RevealStyle::default());
        assert!(css.contains(".reveal { opacity: 0; transform: translateY(2rem);"));
        assert!(css.contains("opacity 700ms ease-out"));
        assert!(css.contains(".reveal.in-view { opacity: 1; transform: translateY(0); }"));
    }

    #[test]
    fn script_embeds_threshold() {
        let js = reveal_script();
        assert!(js.starts_with("const REVEAL_THRESHOLD = 0.15;"));
        assert!(js.contains("IntersectionObserver"));
        assert!(js.contains("unobserve"));
    }

    #[test]
    fn stylesheet_orders_theme_before_reveal_rules() {
        let css = build_stylesheet(&SiteConfig::default());
        let theme = css.find("--color-gold").unwrap();
        let reveal = css.find(".reveal.in-view").unwrap();
        assert!(theme < reveal);
    }

    #[test]
    fn render_index_uses_config() {
        let mut config = SiteConfig::default();
        config.reveal.duration_ms = 450;
        let html = render_index(&config, 2026);
        assert!(html.contains("--reveal-duration: 450ms"));
        assert!(html.contains("opacity 450ms"));
        assert!(html.contains("© 2026"));
    }

    #[test]
    fn generate_writes_index_and_copies_assets() {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        fs::create_dir_all(assets.join("fonts")).unwrap();
        fs::write(assets.join("favicon.png"), b"png").unwrap();
        fs::write(assets.join("fonts/serif.woff2"), b"woff").unwrap();
        let out = tmp.path().join("dist");

        let report = generate(&SiteConfig::default(), &assets, &out).unwrap();

        assert_eq!(report.index, out.join("index.html"));
        assert_eq!(report.assets_copied, 2);
        assert_eq!(report.reveal_blocks, 12);
        assert!(out.join("favicon.png").exists());
        assert!(out.join("fonts/serif.woff2").exists());
        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(html.len(), report.bytes);
    }

    #[test]
    fn generate_without_assets_directory() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let report = generate(&SiteConfig::default(), &tmp.path().join("missing"), &out).unwrap();
        assert_eq!(report.assets_copied, 0);
        assert!(out.join("index.html").exists());
    }
}
