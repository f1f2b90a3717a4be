//! Aggregate statistics from the changes log.
//!
//! The stats file is free-form text. Two marker phrases are recognised
//! anywhere in a line; the rest of the line after the marker is the value:
//!
//! ```text
//! 2024-05-01 restock
//! Total Transactions Done: 42
//! Total Money Sold: $100
//! ```
//!
//! A marker seen again later overrides the earlier value. A line holding
//! both markers only sets the transactions count.

use crate::metadata::text_lines;
use crate::types::Stats;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error reading stats: {0}")]
    Io(#[from] std::io::Error),
}

pub const TRANSACTIONS_MARKER: &str = "Total Transactions Done:";
pub const MONEY_MARKER: &str = "Total Money Sold:";

/// Load the stats file at `path`, or the `N/A` pair if it does not exist.
pub fn load_stats(path: &Path) -> Result<Stats, StatsError> {
    if !path.exists() {
        debug!(path = %path.display(), "no stats file");
        return Ok(Stats::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_stats(&content))
}

/// Scan `content` for the two marker lines.
pub fn parse_stats(content: &str) -> Stats {
    let mut stats = Stats::default();
    for line in text_lines(content) {
        if let Some(value) = value_after(line, TRANSACTIONS_MARKER) {
            stats.transactions = value;
        } else if let Some(value) = value_after(line, MONEY_MARKER) {
            stats.money = value;
        }
    }
    stats
}

/// Text between the first occurrence of `marker` and the next one (or the
/// end of line), trimmed.
fn value_after(line: &str, marker: &str) -> Option<String> {
    let mut parts = line.split(marker);
    parts.next()?;
    parts.next().map(|v| v.trim().to_string())
}
