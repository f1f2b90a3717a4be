//! # Proof Gal
//!
//! Builds a single static HTML page that shows a folder of transaction
//! screenshots as a grid, ordered by the number in their filename, with a
//! click-to-expand viewer, per-image descriptions, and two running totals.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Load      images/ + descriptions.txt + changes.txt  →  Gallery
//! 2. Generate  Gallery                                    →  index.html
//! ```
//!
//! Loading never fails on missing or malformed optional input: a missing
//! side file yields defaults, a bad line is skipped, and an image without a
//! transaction number is left out. Only a missing image directory or a
//! failed write stops the build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `<n> TRANS ...` filename convention: sort key and base name |
//! | [`scan`] | Lists the image directory in gallery order |
//! | [`metadata`] | Description file loading and lookup by base name |
//! | [`stats`] | Totals from the changes log |
//! | [`generate`] | Maud templates and the build entry point |
//! | [`links`] | Percent-encoded image and video hrefs relative to the page |
//! | [`config`] | `gallery.toml` loading, merging onto defaults, validation |
//! | [`types`] | Shared data types and placeholder strings |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Deterministic Output
//!
//! Images with the same number are ordered by filename rather than by
//! directory listing order, and the page carries no timestamps. The same
//! inputs always produce the same bytes, so the output can be committed and
//! diffed.
//!
//! ## Descriptions as Data Attributes
//!
//! Each thumbnail carries its description in an escaped `data-description`
//! attribute. The viewer script reads it at click time, so descriptions
//! containing quotes, backticks, or markup display as text.

pub mod config;
pub mod generate;
pub mod links;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;
pub mod stats;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
