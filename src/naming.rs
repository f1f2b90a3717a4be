//! Filename parsing for the `<number> TRANS<rest>` convention.
//!
//! Gallery images are screenshots named after the transaction they document:
//! an integer, a space, then the `TRANS` marker and any free text.
//!
//! - `12 TRANS paypal.png` → sort key `12`
//! - `7 TRANS.jpg` → sort key `7`
//! - `TRANS 12.png` → no key (marker must follow the number)
//! - `holiday.jpg` → no key
//!
//! Files without a key are not an error; the scanner simply leaves them out.

use std::path::Path;

/// Marker separating the transaction number from the rest of the name.
pub const TRANS_MARKER: &str = " TRANS";

/// Filename with its extension removed (`"1 TRANS a.jpg"` → `"1 TRANS a"`).
///
/// This is the key used to look up descriptions. Dotfiles keep their full
/// name, and only the last extension is stripped.
pub fn base_name(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Derive the ordering key from an image filename.
///
/// Handles these patterns:
/// - `"2 TRANS foo.jpg"` → `Some(2)`
/// - `"10  TRANS.png"` → `Some(10)` (whitespace around the number is ignored)
/// - `"-3 TRANS refund.jpg"` → `Some(-3)`
/// - `"one TRANS.jpg"` → `None`
/// - `"2 trans foo.jpg"` → `None` (marker is case-sensitive)
/// - `"nomatch.jpg"` → `None`
///
/// Keys are `i128`, so numbers of up to 38 digits are accepted. A prefix
/// outside that range (beyond about ±1.7e38) is treated like a missing
/// number and the file is skipped.
pub fn derive_sort_key(filename: &str) -> Option<i128> {
    let stem = base_name(filename);
    let (prefix, _) = stem.split_once(TRANS_MARKER)?;
    prefix.trim().parse::<i128>().ok()
}
