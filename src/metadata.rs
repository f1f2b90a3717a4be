//! Image description loading and resolution.
//!
//! Descriptions live in a single flat file next to the image directory, one
//! record per line:
//!
//! ```text
//! 1 TRANS paypal|Sold a skin bundle, paid through PayPal.
//! 2 TRANS bank | Bank transfer, second order this week.
//! ```
//!
//! The key is the image's base filename (extension removed). Whitespace
//! around the key and the text is trimmed. Lines without a `|` are skipped,
//! and a repeated key keeps the last description seen.
//!
//! A missing description file is normal: every image then falls back to
//! [`NO_DESCRIPTION`].

use crate::naming::base_name;
use crate::types::{DescriptionMap, ImageEntry, ImageFile, NO_DESCRIPTION};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error reading descriptions: {0}")]
    Io(#[from] std::io::Error),
}

const SEPARATOR: char = '|';

/// Load the description file at `path`.
///
/// Returns an empty map if the file does not exist.
pub fn load_descriptions(path: &Path) -> Result<DescriptionMap, MetadataError> {
    if !path.exists() {
        debug!(path = %path.display(), "no description file");
        return Ok(DescriptionMap::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_descriptions(&content))
}

/// Split side-file text into lines, accepting `\n`, `\r\n`, and a bare `\r`
/// as terminators.
pub(crate) fn text_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\n', '\r']))
}

/// Parse `key|description` lines into a map.
pub fn parse_descriptions(content: &str) -> DescriptionMap {
    let mut map = DescriptionMap::new();
    for (idx, line) in text_lines(content).enumerate() {
        match line.trim().split_once(SEPARATOR) {
            Some((key, desc)) => {
                map.insert(key.trim().to_string(), desc.trim().to_string());
            }
            None => {
                if !line.trim().is_empty() {
                    let line_no = idx + 1;
                    debug!(line = line_no, "description line has no separator, skipping");
                }
            }
        }
    }
    map
}

/// Description for an image filename, or the placeholder.
pub fn describe<'a>(descriptions: &'a DescriptionMap, filename: &str) -> &'a str {
    descriptions
        .get(&base_name(filename))
        .map(String::as_str)
        .unwrap_or(NO_DESCRIPTION)
}

/// Attach descriptions to scanned images, preserving order.
pub fn resolve_entries(images: &[ImageFile], descriptions: &DescriptionMap) -> Vec<ImageEntry> {
    images
        .iter()
        .map(|img| ImageEntry {
            filename: img.filename.clone(),
            sort_key: img.sort_key,
            description: describe(descriptions, &img.filename).to_string(),
        })
        .collect()
}
