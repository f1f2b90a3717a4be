//! Shared types passed between the scan, metadata, and generate stages.
//!
//! The `scan` command serializes these to JSON, so field names are part of
//! the tool's visible output.

use serde::Serialize;
use std::collections::BTreeMap;

/// Placeholder shown for images that have no entry in the description file.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Placeholder for a statistic whose marker line is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Base filename → description text.
///
/// Ordered so that diagnostics and JSON output are deterministic.
pub type DescriptionMap = BTreeMap<String, String>;

/// An image file that carries a transaction number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Filename as listed in the image directory, extension included.
    pub filename: String,
    /// Number parsed from the `<n> TRANS` prefix.
    pub sort_key: i128,
}

/// An image ready for rendering, with its description resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub filename: String,
    pub sort_key: i128,
    pub description: String,
}

/// The two aggregate figures shown above the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub transactions: String,
    pub money: String,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            transactions: NOT_AVAILABLE.to_string(),
            money: NOT_AVAILABLE.to_string(),
        }
    }
}
