//! Boundaries and the page ranges built from them.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How a boundary was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundarySource {
    /// Derived from document structure alone
    Fixed,
    /// Located by fuzzy-matching page text
    Variable,
}

/// The page on which a component begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Catalog name of the component
    pub component_name: String,

    /// First page of the component (0-based)
    pub start_page: usize,

    /// Whether the boundary is structural or text-matched
    pub source: BoundarySource,

    /// Similarity score of the accepted match (variable boundaries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Boundary {
    /// Create a structural boundary.
    pub fn fixed(component_name: impl Into<String>, start_page: usize) -> Self {
        Self {
            component_name: component_name.into(),
            start_page,
            source: BoundarySource::Fixed,
            score: None,
        }
    }

    /// Create a text-matched boundary.
    pub fn variable(component_name: impl Into<String>, start_page: usize, score: f64) -> Self {
        Self {
            component_name: component_name.into(),
            start_page,
            source: BoundarySource::Variable,
            score: Some(score),
        }
    }

    /// Check if the boundary came from a fixed rule.
    pub fn is_fixed(&self) -> bool {
        self.source == BoundarySource::Fixed
    }
}

/// A half-open page interval `[start_page, end_page)` owned by one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRange {
    /// Catalog name of the component
    pub component_name: String,

    /// First page (0-based, inclusive)
    pub start_page: usize,

    /// One past the last page (exclusive)
    pub end_page: usize,
}

impl SectionRange {
    /// Create a new range.
    pub fn new(component_name: impl Into<String>, start_page: usize, end_page: usize) -> Self {
        Self {
            component_name: component_name.into(),
            start_page,
            end_page,
        }
    }

    /// Number of pages in the range.
    pub fn len(&self) -> usize {
        self.end_page.saturating_sub(self.start_page)
    }

    /// Check if the range holds no pages.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Page indices as a std range.
    pub fn pages(&self) -> Range<usize> {
        self.start_page..self.end_page
    }

    /// Check if a page index falls inside the range.
    pub fn contains(&self, page: usize) -> bool {
        self.pages().contains(&page)
    }

    /// 1-based inclusive page span for display, e.g. `(2, 16)`.
    pub fn display_span(&self) -> (usize, usize) {
        (self.start_page + 1, self.end_page)
    }
}
