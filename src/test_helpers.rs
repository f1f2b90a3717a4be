//! Shared test utilities for the proof-gal test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_gallery(&["2 TRANS foo.jpg", "1 TRANS bar.png"]);
//! let report = generate(tmp.path(), &GalleryConfig::default()).unwrap();
//!
//! assert_eq!(entry_filenames(&report.gallery), vec!["1 TRANS bar.png", "2 TRANS foo.jpg"]);
//! ```

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::generate::Gallery;
use crate::types::ImageEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/gallery/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/gallery");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Create a gallery root whose `images/` directory holds placeholder files
/// with the given names. No side files are written.
pub fn setup_gallery(image_names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let images = tmp.path().join("images");
    std::fs::create_dir_all(&images).unwrap();
    for name in image_names {
        std::fs::write(images.join(name), "fake image").unwrap();
    }
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups — panics with a clear message on miss
// =========================================================================

/// Find a gallery entry by filename. Panics if not found.
pub fn find_entry<'a>(gallery: &'a Gallery, filename: &str) -> &'a ImageEntry {
    gallery
        .entries
        .iter()
        .find(|e| e.filename == filename)
        .unwrap_or_else(|| {
            let names = entry_filenames(gallery);
            panic!("entry '{filename}' not found. Available: {names:?}")
        })
}

/// All entry filenames in gallery order.
pub fn entry_filenames(gallery: &Gallery) -> Vec<&str> {
    gallery.entries.iter().map(|e| e.filename.as_str()).collect()
}

/// Number of grid thumbnails in a rendered page.
pub fn count_gallery_items(html: &str) -> usize {
    html.matches(r#"class="gallery-item""#).count()
}

/// `src` values of the grid thumbnails, in page order.
pub fn gallery_srcs(html: &str) -> Vec<String> {
    html.split("<img ")
        .skip(1)
        .filter_map(|tag| {
            let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
            if !tag.contains(r#"class="gallery-item""#) {
                return None;
            }
            let start = tag.find(r#"src=""#)? + r#"src=""#.len();
            let len = tag[start..].find('"')?;
            Some(tag[start..start + len].to_string())
        })
        .collect()
}

/// File a relative `src` points at when the page lives in `page_dir`.
pub fn resolve_src(page_dir: &Path, src: &str) -> PathBuf {
    let decoded = percent_decode_str(src).decode_utf8().unwrap();
    page_dir.join(decoded.as_ref())
}
