//! Variable-section location by fuzzy header matching.

use crate::catalog::Catalog;
use crate::model::{Boundary, Page};

use super::normalize::{header_lines, normalize};
use super::options::DetectOptions;
use super::similarity::best_line_score;

/// Result of scanning pages for variable components.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocateOutcome {
    /// One boundary per matched name, in page order
    pub boundaries: Vec<Boundary>,

    /// Variable names that never reached the threshold, in catalog order
    pub missing: Vec<String>,
}

/// A variable catalog name waiting for its first qualifying page.
struct Candidate<'a> {
    name: &'a str,
    key: String,
    matched: bool,
}

/// Scan pages in document order and bind each variable name to the first
/// page whose header window reaches the threshold.
///
/// Pages before `scan_from` and pages flagged in `claimed` are skipped.
/// A page binds at most one name: the strictly highest scorer, or on an
/// exact tie the name listed first in the catalog.
pub fn locate_variable(
    pages: &[Page],
    catalog: &Catalog,
    claimed: &[bool],
    scan_from: usize,
    options: &DetectOptions,
) -> LocateOutcome {
    let mut candidates: Vec<Candidate<'_>> = catalog
        .variable()
        .map(|entry| Candidate {
            name: &entry.name,
            key: normalize(&entry.name),
            matched: false,
        })
        .collect();

    let mut boundaries = Vec::new();

    for page in pages.iter().skip(scan_from) {
        if candidates.iter().all(|c| c.matched) {
            break;
        }
        if claimed.get(page.index).copied().unwrap_or(false) {
            continue;
        }

        let window = header_lines(&page.text, options.header_lines, options.min_line_chars);
        if window.is_empty() {
            continue;
        }

        // (candidate index, score, matched line)
        let mut best: Option<(usize, f64, &str)> = None;
        for (idx, candidate) in candidates.iter().enumerate() {
            if candidate.matched {
                continue;
            }
            let Some((score, line)) = best_line_score(&window, &candidate.key) else {
                continue;
            };
            if score < options.threshold {
                continue;
            }
            match best {
                Some((_, best_score, _)) if best_score >= score => {}
                _ => best = Some((idx, score, line)),
            }
        }

        if let Some((idx, score, line)) = best {
            let candidate = &mut candidates[idx];
            candidate.matched = true;
            log::info!(
                "Found '{}' on page {} (match: '{}' with score {:.2})",
                candidate.name,
                page.number(),
                truncate(line, 60),
                score
            );
            boundaries.push(Boundary::variable(candidate.name, page.index, score));
        }
    }

    let missing: Vec<String> = candidates
        .iter()
        .filter(|c| !c.matched)
        .map(|c| c.name.to_string())
        .collect();

    for name in &missing {
        log::warn!("Component '{}' was not found in the document", name);
    }

    LocateOutcome {
        boundaries,
        missing,
    }
}

fn truncate(line: &str, max_chars: usize) -> &str {
    match line.char_indices().nth(max_chars) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
