//! Gallery configuration.
//!
//! Handles loading, validating, and merging `gallery.toml`. Stock defaults
//! reproduce the classic layout, so a gallery root with no config file at all
//! builds exactly as before:
//!
//! ```text
//! ./
//! ├── gallery.toml        # optional
//! ├── images/             # screenshots named "<n> TRANS ...".jpg|png
//! ├── descriptions.txt    # optional, "<base name>|<text>" per line
//! ├── changes.txt         # optional, stats marker lines
//! ├── background.mp4      # optional, referenced by the page
//! └── index.html          # generated
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [paths]
//! images = "images"
//! descriptions = "descriptions.txt"
//! stats = "changes.txt"
//! output = "index.html"
//!
//! [page]
//! title = "Proof Gallery"
//! heading = "Proof Of Success"
//! background_video = "background.mp4"   # "" disables the video
//! columns = 3
//! max_width = "1000px"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. The user file is merged key-by-key on top of the
//! stock defaults, so overriding one value leaves the rest untouched:
//!
//! ```toml
//! [page]
//! heading = "Receipts"
//! ```
//!
//! Unknown keys are rejected.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the gallery root.
pub const CONFIG_FILE: &str = "gallery.toml";

const MAX_COLUMNS: u32 = 12;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Input and output locations, relative to the gallery root.
    pub paths: PathsConfig,
    /// Page text and layout.
    pub page: PageConfig,
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.images.trim().is_empty() {
            return Err(ConfigError::Validation(
                "paths.images must not be empty".into(),
            ));
        }
        if self.paths.output.trim().is_empty() {
            return Err(ConfigError::Validation(
                "paths.output must not be empty".into(),
            ));
        }
        if self.page.columns == 0 || self.page.columns > MAX_COLUMNS {
            return Err(ConfigError::Validation(format!(
                "page.columns must be 1-{MAX_COLUMNS}"
            )));
        }
        if !is_css_length(&self.page.max_width) {
            return Err(ConfigError::Validation(format!(
                "page.max_width {:?} is not a CSS length (e.g. 1000px, 90%, min(90vw, 1200px))",
                self.page.max_width
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the screenshots.
    pub images: String,
    /// `key|description` file.
    pub descriptions: String,
    /// Changes log with the stats marker lines.
    pub stats: String,
    /// Generated HTML document.
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            images: "images".to_string(),
            descriptions: "descriptions.txt".to_string(),
            stats: "changes.txt".to_string(),
            output: "index.html".to_string(),
        }
    }
}

impl PathsConfig {
    /// Resolve every path against the gallery root.
    pub fn resolve(&self, root: &Path) -> BuildPaths {
        BuildPaths {
            image_dir: root.join(&self.images),
            description_file: root.join(&self.descriptions),
            stats_file: root.join(&self.stats),
            output_file: root.join(&self.output),
        }
    }
}

/// Absolute (or root-relative) locations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub image_dir: PathBuf,
    pub description_file: PathBuf,
    pub stats_file: PathBuf,
    pub output_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Document `<title>`.
    pub title: String,
    /// Heading shown above the stats.
    pub heading: String,
    /// Looping background video next to the page. Empty disables it.
    pub background_video: String,
    /// Number of grid columns.
    pub columns: u32,
    /// CSS max-width of the grid.
    pub max_width: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Proof Gallery".to_string(),
            heading: "Proof Of Success".to_string(),
            background_video: "background.mp4".to_string(),
            columns: 3,
            max_width: "1000px".to_string(),
        }
    }
}

impl PageConfig {
    pub fn background_video(&self) -> Option<&str> {
        Some(self.background_video.trim()).filter(|v| !v.is_empty())
    }
}

/// `max_width` is written straight into the page's `<style>` block, so only
/// characters that can appear in a length or a `calc()`/`min()` expression
/// are allowed.
fn is_css_length(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || " .,%()+-*/".contains(c))
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
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

/// Load `gallery.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the defaults, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config for the gallery rooted at `root`.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Proof Gallery Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Paths (relative to the directory holding this file)
# ---------------------------------------------------------------------------
[paths]
# Screenshots named "<number> TRANS <anything>.jpg|png".
# Files without a number before " TRANS" are left out of the gallery.
images = "images"

# One "<image name without extension>|<description>" per line.
# Missing file = every image shows "No description available."
descriptions = "descriptions.txt"

# Free-form log; lines containing "Total Transactions Done:" and
# "Total Money Sold:" feed the stats block. Missing file = "N/A".
stats = "changes.txt"

# Generated page. Keep it next to the images directory so links resolve.
output = "index.html"

# ---------------------------------------------------------------------------
# Page
# ---------------------------------------------------------------------------
[page]
title = "Proof Gallery"
heading = "Proof Of Success"

# Looping muted video behind the page. Set to "" to disable.
background_video = "background.mp4"

# Grid columns (1-12) and maximum grid width (CSS value).
columns = 3
max_width = "1000px"
"##
}

/// Generate CSS custom properties from the page config.
pub fn generate_theme_css(page: &PageConfig) -> String {
    format!(
        ":root {{\n    --grid-columns: {};\n    --grid-max-width: {};\n}}",
        page.columns, page.max_width
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_classic_layout() {
        let config = GalleryConfig::default();
        assert_eq!(config.paths.images, "images");
        assert_eq!(config.paths.descriptions, "descriptions.txt");
        assert_eq!(config.paths.stats, "changes.txt");
        assert_eq!(config.paths.output, "index.html");
        assert_eq!(config.page.columns, 3);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.page.title, "Proof Gallery");
        assert_eq!(config.page.background_video(), Some("background.mp4"));
    }

    #[test]
    fn partial_config_overrides_one_key() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[page]\nheading = \"Receipts\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.page.heading, "Receipts");
        assert_eq!(config.page.title, "Proof Gallery");
        assert_eq!(config.paths.images, "images");
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[page]\nfooter = \"x\"\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[page\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn zero_columns_rejected() {
        let mut config = GalleryConfig::default();
        config.page.columns = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn too_many_columns_rejected() {
        let mut config = GalleryConfig::default();
        config.page.columns = 13;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_images_path_rejected() {
        let mut config = GalleryConfig::default();
        config.paths.images = " ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn max_width_accepts_css_lengths() {
        for width in ["1000px", "90%", "60rem", "min(90vw, 1200px)", "calc(100% - 2em)"] {
            let mut config = GalleryConfig::default();
            config.page.max_width = width.into();
            assert!(config.validate().is_ok(), "{width}");
        }
    }

    #[test]
    fn max_width_markup_rejected() {
        for width in [
            "1px</style><script>alert(1)</script>",
            "1px; } body { display: none",
            "\"1px\"",
            "",
        ] {
            let mut config = GalleryConfig::default();
            config.page.max_width = width.into();
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "{width}"
            );
        }
    }

    #[test]
    fn max_width_markup_in_file_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[page]\nmax_width = \"1px</style><script>alert(1)</script>\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn empty_video_disables_background() {
        let mut page = PageConfig::default();
        page.background_video = String::new();
        assert_eq!(page.background_video(), None);
    }

    #[test]
    fn paths_resolve_against_root() {
        let paths = PathsConfig::default().resolve(Path::new("/srv/gallery"));
        assert_eq!(paths.image_dir, Path::new("/srv/gallery/images"));
        assert_eq!(
            paths.description_file,
            Path::new("/srv/gallery/descriptions.txt")
        );
        assert_eq!(paths.stats_file, Path::new("/srv/gallery/changes.txt"));
        assert_eq!(paths.output_file, Path::new("/srv/gallery/index.html"));
    }

    #[test]
    fn merge_toml_preserves_unrelated_keys() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(stock_defaults_value(), Some(value)).unwrap();
        let defaults = GalleryConfig::default();
        assert_eq!(config.paths.output, defaults.paths.output);
        assert_eq!(config.page.heading, defaults.page.heading);
        assert_eq!(config.page.max_width, defaults.page.max_width);
    }

    #[test]
    fn theme_css_exposes_grid_settings() {
        let css = generate_theme_css(&PageConfig::default());
        assert!(css.contains("--grid-columns: 3;"));
        assert!(css.contains("--grid-max-width: 1000px;"));
    }
}
