//! CLI output formatting.
//!
//! Output is **information-centric**: every image is shown by its position
//! and transaction number first, with the filename and description as
//! indented context lines.
//!
//! # Output Format
//!
//! ## Check / Build inventory
//!
//! ```text
//! Images (images/)
//! 001 #1 paypal
//!     Source: 1 TRANS paypal.png
//!     Description: Skin bundle, paid through PayPal.
//! 002 #2 bank
//!     Source: 2 TRANS bank.jpg
//!
//! Skipped (no transaction number)
//!     screenshot.jpg
//!
//! Stats
//!     Total Transactions Done: 42
//!     Total Money Sold: $100
//! ```
//!
//! ## Generate
//!
//! ```text
//! Generated index.html (4 images, 1 skipped, 9120 bytes)
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns `Vec<String>` and does no I/O; the
//! `print_*` wrappers write to stdout.

use crate::generate::{Gallery, GenerateReport};
use crate::naming::{TRANS_MARKER, base_name};
use crate::stats::{MONEY_MARKER, TRANSACTIONS_MARKER};
use crate::types::{ImageEntry, NO_DESCRIPTION};
use std::path::Path;

const DESCRIPTION_PREVIEW: usize = 60;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Label for an entry: the text after the marker, or the filename when
/// there is none.
///
/// ```text
/// "1 TRANS paypal.png" → "paypal"
/// "7 TRANS.jpg"        → "(7 TRANS.jpg)"
/// ```
fn entry_label(entry: &ImageEntry) -> String {
    let stem = base_name(&entry.filename);
    match stem.split_once(TRANS_MARKER) {
        Some((_, rest)) if !rest.trim().is_empty() => rest.trim().to_string(),
        _ => format!("({})", entry.filename),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// Format the gallery inventory shown by `check` and `build`.
pub fn format_gallery_output(gallery: &Gallery, image_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Images ({}/)", image_dir.display()));
    if gallery.entries.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (idx, entry) in gallery.entries.iter().enumerate() {
        lines.push(format!(
            "{} #{} {}",
            format_index(idx + 1),
            entry.sort_key,
            entry_label(entry)
        ));
        lines.push(format!("{}Source: {}", indent(1), entry.filename));
        if entry.description != NO_DESCRIPTION {
            lines.push(format!(
                "{}Description: {}",
                indent(1),
                truncate_desc(&entry.description, DESCRIPTION_PREVIEW)
            ));
        }
    }

    if !gallery.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped (no transaction number)".to_string());
        for name in &gallery.skipped {
            lines.push(format!("{}{}", indent(1), name));
        }
    }

    lines.push(String::new());
    lines.push("Stats".to_string());
    lines.push(format!(
        "{}{} {}",
        indent(1),
        TRANSACTIONS_MARKER,
        gallery.stats.transactions
    ));
    lines.push(format!(
        "{}{} {}",
        indent(1),
        MONEY_MARKER,
        gallery.stats.money
    ));

    lines
}

pub fn print_gallery_output(gallery: &Gallery, image_dir: &Path) {
    for line in format_gallery_output(gallery, image_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format the one-line build summary.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let images = report.gallery.entries.len();
    let noun = if images == 1 { "image" } else { "images" };
    vec![format!(
        "Generated {} ({} {}, {} skipped, {} bytes)",
        report.output_file.display(),
        images,
        noun,
        report.gallery.skipped.len(),
        report.bytes_written
    )]
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
