//! Output filename derivation.

use regex::Regex;
use std::sync::LazyLock;

static RE_UNSAFE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Fallback stem for names that sanitize to nothing.
const FALLBACK_STEM: &str = "component";

/// Turn a component name into a filesystem-safe stem.
///
/// Punctuation is dropped, runs of whitespace and hyphens become a single
/// underscore, and the result is lower-cased.
///
/// ```
/// use splitpdf::pdf::sanitize_filename;
///
/// assert_eq!(
///     sanitize_filename("Facilities, Equipment and Other Resources"),
///     "facilities_equipment_and_other_resources"
/// );
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let stripped = RE_UNSAFE.replace_all(name.trim(), "");
    let joined = RE_SEPARATORS.replace_all(&stripped, "_");
    let stem = joined.trim_matches('_').to_lowercase();
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

/// File name (with `.pdf` extension) for a component.
pub fn output_filename(name: &str) -> String {
    format!("{}.pdf", sanitize_filename(name))
}
