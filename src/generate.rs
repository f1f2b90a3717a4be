//! HTML page generation.
//!
//! Stage 2 of the build. Combines the scanned images, their descriptions, and
//! the stats into one self-contained page:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ (background video, optional)         │
//! │ Proof Of Success                     │
//! │ Total Transactions Done: 42          │
//! │ Total Money Sold: $100               │
//! │ ┌─────┐ ┌─────┐ ┌─────┐              │
//! │ │  1  │ │  2  │ │  3  │  grid        │
//! │ └─────┘ └─────┘ └─────┘              │
//! └──────────────────────────────────────┘
//! ```
//!
//! Clicking a thumbnail opens an overlay with the full image and its
//! description. Each grid `<img>` carries its description in a
//! `data-description` attribute; the inline script reads it from there, so
//! descriptions never have to be spliced into JavaScript source.
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time and inlined into the page:
//! - `static/style.css`: layout and overlay styles (grid settings injected from config)
//! - `static/viewer.js`: overlay open/close
//!
//! ## Determinism
//!
//! Rendering is a pure function of its inputs: no timestamps, no random ids.
//! Building twice from the same inputs writes byte-identical files.

use crate::config::{self, BuildPaths, GalleryConfig};
use crate::links::{self, PageLinks};
use crate::metadata::{self, MetadataError};
use crate::scan::{self, ScanError};
use crate::stats::{self, MONEY_MARKER, StatsError, TRANSACTIONS_MARKER};
use crate::types::{DescriptionMap, ImageEntry, ImageFile, Stats};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Description error: {0}")]
    Metadata(#[from] MetadataError),
    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Everything the page shows, with descriptions already resolved.
#[derive(Debug, Clone, Serialize)]
pub struct Gallery {
    pub entries: Vec<ImageEntry>,
    /// Image files left out for lack of a transaction number.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub stats: Stats,
}

/// Result of a completed build.
#[derive(Debug)]
pub struct GenerateReport {
    pub gallery: Gallery,
    pub output_file: PathBuf,
    pub bytes_written: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/viewer.js");

/// Read the image directory and both side files.
pub fn load_gallery(paths: &BuildPaths) -> Result<Gallery, GenerateError> {
    let scanned = scan::scan(&paths.image_dir)?;
    let descriptions = metadata::load_descriptions(&paths.description_file)?;
    let stats = stats::load_stats(&paths.stats_file)?;

    Ok(Gallery {
        entries: metadata::resolve_entries(&scanned.images, &descriptions),
        skipped: scanned.skipped,
        stats,
    })
}

/// Run the full build for the gallery rooted at `root` and write the page.
pub fn generate(root: &Path, config: &GalleryConfig) -> Result<GenerateReport, GenerateError> {
    let paths = config.paths.resolve(root);
    let gallery = load_gallery(&paths)?;
    let links = links::page_links(config, &std::path::absolute(root)?);

    let page = render_gallery(&gallery.entries, &gallery.stats, config, &links).into_string();

    if let Some(parent) = paths.output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&paths.output_file, &page)?;
    info!(
        output = %paths.output_file.display(),
        images = gallery.entries.len(),
        "wrote gallery page"
    );

    Ok(GenerateReport {
        gallery,
        output_file: paths.output_file,
        bytes_written: page.len(),
    })
}

/// Render the page from scanned images and the raw description map.
///
/// Links follow the configured layout, with the page at `paths.output`.
pub fn render(
    images: &[ImageFile],
    descriptions: &DescriptionMap,
    stats: &Stats,
    config: &GalleryConfig,
) -> Markup {
    let entries = metadata::resolve_entries(images, descriptions);
    let links = links::page_links(config, Path::new(""));
    render_gallery(&entries, stats, config, &links)
}

/// Render the page from entries whose descriptions are already resolved.
pub fn render_gallery(
    entries: &[ImageEntry],
    stats: &Stats,
    config: &GalleryConfig,
    links: &PageLinks,
) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_theme_css(&config.page),
        CSS_STATIC
    );

    let content = html! {
        (background_video(links))
        h1 { (config.page.heading) }
        (stats_block(stats))
        div.grid {
            @for entry in entries {
                (grid_item(entry, links))
            }
        }
        (overlay())
        script { (PreEscaped(JS)) }
    };

    base_document(&config.page.title, &css, content)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn background_video(links: &PageLinks) -> Markup {
    html! {
        @if let Some(src) = &links.background_video {
            video id="bgVideo" autoplay muted loop playsinline {
                source src=(src) type="video/mp4";
            }
        }
    }
}

fn stats_block(stats: &Stats) -> Markup {
    html! {
        div.stats {
            strong { (TRANSACTIONS_MARKER) }
            " " (stats.transactions)
            br;
            strong { (MONEY_MARKER) }
            " " (stats.money)
        }
    }
}

fn grid_item(entry: &ImageEntry, links: &PageLinks) -> Markup {
    let src = links.image_href(&entry.filename);
    html! {
        img.gallery-item
            src=(src)
            alt={ "Transaction " (entry.sort_key) }
            loading="lazy"
            data-description=(entry.description);
    }
}

/// Click-to-expand viewer, hidden until an image is clicked.
fn overlay() -> Markup {
    html! {
        div.overlay id="overlay" {
            div.overlay-box {
                img id="overlayImage" src="" alt="";
                div.desc-wrap {
                    div.desc id="overlayDesc" { "Description" }
                    button.back-btn type="button" { "Back" }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
