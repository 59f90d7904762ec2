//! Place-name canonicalization.
//!
//! Lookup keys are lowercase, trimmed, and accent-stripped, so "Río Cuarto",
//! "RIO CUARTO" and "  rio cuarto " all map to the same gazetteer entry.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// NFD decomposes ñ into n + combining tilde, which the mark filter would
// silently turn into a plain n. That is the fold we want, but it must not
// depend on the decomposition pass: the letter is swapped out beforehand and
// folded explicitly at the end.
const ENYE_SENTINEL: char = '\u{0}';

/// Canonicalize a place name into a gazetteer lookup key.
///
/// Lowercases, trims surrounding whitespace, strips diacritics, and folds
/// `ñ` to `n`. Empty input yields the empty string. Pure and deterministic;
/// idempotent on already-canonical input.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return String::new();
    }

    lowered
        .replace('ñ', &ENYE_SENTINEL.to_string())
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == ENYE_SENTINEL { 'n' } else { c })
        .collect()
}
