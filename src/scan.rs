//! Image directory scanning.
//!
//! Stage 1 of the build. Lists the image directory, keeps `.jpg` and `.png`
//! files, and orders them by the transaction number in their name.
//!
//! ```text
//! images/
//! ├── 1 TRANS bar.png      # key 1
//! ├── 2 TRANS foo.jpg      # key 2
//! ├── 2 TRANS alpha.jpg    # key 2, sorts before "2 TRANS foo.jpg"
//! ├── nomatch.jpg          # no key → skipped
//! └── notes.txt            # not an image → ignored
//! ```
//!
//! ## Ordering
//!
//! Ascending by sort key. Images sharing a key are ordered by filename
//! (byte-wise), so the result never depends on the order the platform
//! returns directory entries in.
//!
//! ## Skipped files
//!
//! Image files without a key are left out of the gallery. They are not an
//! error; the scan reports them in [`ScanResult::skipped`] so the CLI can
//! show them.

use crate::naming::derive_sort_key;
use crate::types::ImageFile;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image directory not found: {0}")]
    MissingDirectory(PathBuf),
    #[error("Image path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Outcome of scanning the image directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Keyed images, in gallery order.
    pub images: Vec<ImageFile>,
    /// Image files with no transaction number, sorted by name.
    pub skipped: Vec<String>,
}

/// Suffixes accepted as images, compared case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".png"];

/// Scan `dir` and return keyed images in gallery order plus skipped files.
pub fn scan(dir: &Path) -> Result<ScanResult, ScanError> {
    if !dir.exists() {
        return Err(ScanError::MissingDirectory(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut filenames = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        filenames.push(entry.file_name().to_string_lossy().into_owned());
    }

    let result = order_images(filenames);
    debug!(
        dir = %dir.display(),
        images = result.images.len(),
        skipped = result.skipped.len(),
        "scanned image directory"
    );
    Ok(result)
}

/// List the keyed images of `dir` in gallery order.
pub fn list_sorted_images(dir: &Path) -> Result<Vec<ImageFile>, ScanError> {
    Ok(scan(dir)?.images)
}

/// Filter and order a set of filenames. Pure; `scan` feeds it the listing.
pub fn order_images<I>(filenames: I) -> ScanResult
where
    I: IntoIterator<Item = String>,
{
    let mut images = Vec::new();
    let mut skipped = Vec::new();

    for filename in filenames.into_iter().filter(|f| is_image_name(f)) {
        match derive_sort_key(&filename) {
            Some(sort_key) => images.push(ImageFile { filename, sort_key }),
            None => {
                debug!(file = %filename, "no transaction number, skipping");
                skipped.push(filename);
            }
        }
    }

    images.sort_by(|a, b| {
        a.sort_key
            .cmp(&b.sort_key)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    skipped.sort();

    ScanResult { images, skipped }
}

fn is_image_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
