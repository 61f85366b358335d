//! Approximate string likeness between a page header and a catalog name.

/// Default minimum score for accepting a header as a component start.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.70;

/// Score two normalized strings in `[0, 1]`.
///
/// Takes the better of normalized Levenshtein (rewards near-exact headers)
/// and bigram Sørensen-Dice (tolerates reordered words such as
/// "summary of the project"). Both are symmetric and give 1.0 for equal
/// inputs, so the combined score is too.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let edit = strsim::normalized_levenshtein(a, b);
    let dice = strsim::sorensen_dice(a, b);
    edit.max(dice).clamp(0.0, 1.0)
}

/// Best score of any line in `window` against `name`.
pub fn best_line_score<'a>(window: &'a [String], name: &str) -> Option<(f64, &'a str)> {
    window
        .iter()
        .map(|line| (similarity(line, name), line.as_str()))
        .fold(None, |best, (score, line)| match best {
            Some((best_score, _)) if best_score >= score => best,
            _ => Some((score, line)),
        })
}
