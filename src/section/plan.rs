//! The detection pipeline: fixed rules, then text matching, then ranges.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{Page, SectionRange};

use super::fixed::{claimed_pages, resolve_fixed, scan_start};
use super::locator::locate_variable;
use super::options::DetectOptions;
use super::ranges::build_ranges;

/// Where every detected component lives in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPlan {
    /// Total pages in the source document
    pub page_count: usize,

    /// Ordered, contiguous ranges, one per detected component
    pub ranges: Vec<SectionRange>,

    /// Variable components that were never found
    pub missing: Vec<String>,
}

impl SectionPlan {
    /// Find the range of a component by name.
    pub fn range(&self, component_name: &str) -> Option<&SectionRange> {
        self.ranges
            .iter()
            .find(|r| r.component_name == component_name)
    }

    /// Number of detected components.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if no component was detected.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Run the full detection pipeline over extracted pages.
///
/// # Example
///
/// ```
/// use splitpdf::model::Page;
/// use splitpdf::section::{plan_sections, DetectOptions};
/// use splitpdf::Catalog;
///
/// let mut texts = vec!["Project Summary".to_string()];
/// texts.extend((1..16).map(|i| format!("Description page {}", i)));
/// texts.push("References Cited".to_string());
/// texts.push("Mentoring Plan".to_string());
///
/// let pages = Page::sequence(texts);
/// let plan = plan_sections(&pages, &Catalog::proposal(), &DetectOptions::default()).unwrap();
/// assert_eq!(plan.range("Mentoring Plan").map(|r| r.start_page), Some(17));
/// ```
pub fn plan_sections(
    pages: &[Page],
    catalog: &Catalog,
    options: &DetectOptions,
) -> Result<SectionPlan> {
    let page_count = pages.len();

    let fixed = resolve_fixed(page_count, catalog)?;
    let claimed = claimed_pages(catalog, page_count);
    let scan_from = scan_start(catalog, page_count);

    let located = locate_variable(pages, catalog, &claimed, scan_from, options);
    log::info!(
        "Detected {} fixed and {} text-matched components",
        fixed.len(),
        located.boundaries.len()
    );

    let ranges = build_ranges(&fixed, &located.boundaries, page_count)?;
    for range in &ranges {
        let (first, last) = range.display_span();
        log::debug!("  - {}: pages {}-{}", range.component_name, first, last);
    }

    Ok(SectionPlan {
        page_count,
        ranges,
        missing: located.missing,
    })
}
