//! Text normalization for header comparison.

use unicode_normalization::UnicodeNormalization;

/// Fold compatibility characters, lower-case, trim and collapse whitespace.
///
/// NFKC folding turns PDF ligatures (`ﬁ`, `ﬂ`) and full-width forms into
/// plain letters before comparison.
///
/// # Example
///
/// ```
/// use splitpdf::section::normalize;
///
/// assert_eq!(normalize("  Project\t\nSUMMARY "), "project summary");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    folded
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The leading text window of a page.
///
/// Returns up to `max_lines` normalized lines from the top of the page,
/// skipping lines shorter than `min_chars` characters (page numbers, stray
/// glyphs) and empty lines.
pub fn header_lines(text: &str, max_lines: usize, min_chars: usize) -> Vec<String> {
    text.lines()
        .map(normalize)
        .filter(|line| !line.is_empty() && line.chars().count() >= min_chars)
        .take(max_lines)
        .collect()
}
