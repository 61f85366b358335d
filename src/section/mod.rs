//! Section-boundary detection.
//!
//! The pipeline runs in four stages, each a plain function:
//!
//! 1. [`resolve_fixed`] places components whose position follows from the
//!    document structure.
//! 2. [`claimed_pages`] and [`scan_start`] mark the pages those rules own.
//! 3. [`locate_variable`] scans the remaining pages and fuzzy-matches their
//!    headers against the unresolved catalog names.
//! 4. [`build_ranges`] merges all boundaries into contiguous page ranges.
//!
//! [`plan_sections`] composes them.

mod fixed;
mod locator;
mod normalize;
mod options;
mod plan;
mod ranges;
mod similarity;

pub use fixed::{claimed_pages, resolve_fixed, scan_start};
pub use locator::{locate_variable, LocateOutcome};
pub use normalize::{header_lines, normalize};
pub use options::{DetectOptions, DEFAULT_HEADER_LINES, DEFAULT_MIN_LINE_CHARS};
pub use plan::{plan_sections, SectionPlan};
pub use ranges::{build_ranges, merge_boundaries};
pub use similarity::{best_line_score, similarity, DEFAULT_SIMILARITY_THRESHOLD};
