//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Stock defaults
//! reproduce the S&M Construction page exactly; a user file only needs the
//! keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [brand]
//! mark_left = "S"           # Letter before the gold ampersand
//! mark_right = "M"          # Letter after the gold ampersand
//! tagline = "The Construction Standard"
//! company = "S&M Construction"
//!
//! [colors]
//! gold = "#c9a84c"          # Accent: ampersand, rules, buttons
//! background = "#020617"    # Page, gallery and footer background
//! surface = "#0f172a"       # Services section background
//! text = "#ffffff"
//! text_soft = "#e2e8f0"     # Hero subtitle
//! text_muted = "#94a3b8"    # Nav links, service descriptions
//!
//! [reveal]
//! duration_ms = 700         # Fade/slide duration
//! offset = "2rem"           # How far hidden blocks sit below their final position
//! easing = "ease-out"
//!
//! [hero]
//! image = "https://images.unsplash.com/..."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::content;
use crate::reveal::RevealStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Longest reveal animation accepted by validation.
pub const MAX_REVEAL_DURATION_MS: u64 = 10_000;

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand mark and copy.
    pub brand: BrandConfig,
    /// Palette, exported as CSS custom properties.
    pub colors: ColorConfig,
    /// Timing and offset shared by every reveal on the page.
    pub reveal: RevealStyle,
    /// Hero banner settings.
    pub hero: HeroConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal.duration_ms == 0 || self.reveal.duration_ms > MAX_REVEAL_DURATION_MS {
            return Err(ConfigError::Validation(format!(
                "reveal.duration_ms must be 1-{MAX_REVEAL_DURATION_MS}"
            )));
        }
        if self.reveal.offset.trim().is_empty() {
            return Err(ConfigError::Validation(
                "reveal.offset must not be empty".into(),
            ));
        }
        for (name, value) in self.colors.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must not be empty"
                )));
            }
        }
        if self.brand.mark_left.is_empty() || self.brand.mark_right.is_empty() {
            return Err(ConfigError::Validation(
                "brand.mark_left and brand.mark_right must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Brand mark and copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    pub mark_left: String,
    pub mark_right: String,
    pub tagline: String,
    /// Legal name shown in the copyright line.
    pub company: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            mark_left: "S".to_string(),
            mark_right: "M".to_string(),
            tagline: "The Construction Standard".to_string(),
            company: "S&M Construction".to_string(),
        }
    }
}

/// Page palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub gold: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_soft: String,
    pub text_muted: String,
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("gold", self.gold.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text_soft", self.text_soft.as_str()),
            ("text_muted", self.text_muted.as_str()),
        ]
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            gold: "#c9a84c".to_string(),
            background: "#020617".to_string(),
            surface: "#0f172a".to_string(),
            text: "#ffffff".to_string(),
            text_soft: "#e2e8f0".to_string(),
            text_muted: "#94a3b8".to_string(),
        }
    }
}

/// Hero banner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Background image URL.
    pub image: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            image: content::HERO_IMAGE.to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value. `Ok(None)` if it does not exist.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `config_path` over the stock defaults. A missing file yields the
/// defaults.
pub fn load_config(config_path: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(config_path)?;
    if overlay.is_none() {
        tracing::debug!(path = %config_path.display(), "no config file, using stock defaults");
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# S&M Site Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Brand
# ---------------------------------------------------------------------------
[brand]
# The mark renders as <mark_left>&<mark_right>, ampersand in gold.
mark_left = "S"
mark_right = "M"
tagline = "The Construction Standard"
# Used in the footer copyright line.
company = "S&M Construction"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
gold = "#c9a84c"
background = "#020617"
surface = "#0f172a"
text = "#ffffff"
text_soft = "#e2e8f0"
text_muted = "#94a3b8"

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# Blocks fade and slide into place the first time 15% of them is visible.
# Duration of that transition, in milliseconds (1-10000).
duration_ms = 700

# How far below its final position a hidden block sits (CSS length).
offset = "2rem"

# CSS timing function.
easing = "ease-out"

# ---------------------------------------------------------------------------
# Hero
# ---------------------------------------------------------------------------
[hero]
image = "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?auto=format&fit=crop&w=2000&q=80"
"##
}

/// Generate CSS custom properties from the palette and reveal settings.
pub fn generate_theme_css(config: &SiteConfig) -> String {
    let colors = &config.colors;
    format!(
        r#":root {{
    --color-gold: {gold};
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-soft: {text_soft};
    --color-text-muted: {text_muted};
    --reveal-duration: {duration}ms;
    --reveal-offset: {offset};
    --reveal-easing: {easing};
}}"#,
        gold = colors.gold,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_soft = colors.text_soft,
        text_muted = colors.text_muted,
        duration = config.reveal.duration_ms,
        offset = config.reveal.offset,
        easing = config.reveal.easing,
    )
}
