//! Boundary merging and range building.

use crate::error::{Error, Result};
use crate::model::{Boundary, SectionRange};

/// Merge fixed and variable boundaries and slice the document into ranges.
///
/// Boundaries are ordered by start page. When a fixed and a variable
/// boundary share a start page the fixed one is kept. Each range ends where
/// the next one starts; the last range ends at `page_count`.
pub fn build_ranges(
    fixed: &[Boundary],
    variable: &[Boundary],
    page_count: usize,
) -> Result<Vec<SectionRange>> {
    let merged = merge_boundaries(fixed, variable, page_count);
    if merged.is_empty() {
        return Err(Error::NoBoundaries);
    }

    let ranges = merged
        .iter()
        .enumerate()
        .map(|(i, boundary)| {
            let end_page = merged
                .get(i + 1)
                .map(|next| next.start_page)
                .unwrap_or(page_count);
            SectionRange::new(boundary.component_name.clone(), boundary.start_page, end_page)
        })
        .collect();

    Ok(ranges)
}

/// Sort boundaries by start page, dropping out-of-bounds and shadowed ones.
pub fn merge_boundaries(
    fixed: &[Boundary],
    variable: &[Boundary],
    page_count: usize,
) -> Vec<Boundary> {
    // Fixed first so the stable sort keeps them ahead on equal start pages.
    let mut all: Vec<&Boundary> = fixed.iter().chain(variable.iter()).collect();
    all.sort_by_key(|b| b.start_page);

    let mut merged: Vec<Boundary> = Vec::with_capacity(all.len());
    for boundary in all {
        if boundary.start_page >= page_count {
            log::warn!(
                "Ignoring '{}': start page {} is past the end of the document",
                boundary.component_name,
                boundary.start_page + 1
            );
            continue;
        }
        match merged.last() {
            Some(prev) if prev.start_page == boundary.start_page => {
                log::warn!(
                    "'{}' and '{}' both start on page {}; keeping '{}'",
                    prev.component_name,
                    boundary.component_name,
                    boundary.start_page + 1,
                    prev.component_name
                );
            }
            _ => merged.push(boundary.clone()),
        }
    }

    merged
}
