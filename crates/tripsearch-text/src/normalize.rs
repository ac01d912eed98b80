//! Canonical form used before any fuzzy comparison.
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, decompose (NFD), drop combining marks, collapse whitespace.
///
/// Thai vowel and tone marks are combining marks, so `"เกาะพีพี"` and
/// `"เกาะพพ"` normalize to the same string.
pub fn normalize(text: &str) -> String {
    let folded: String = text.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)).collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
