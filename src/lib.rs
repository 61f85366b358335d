//! # splitpdf
//!
//! Split a multi-section proposal PDF into one PDF per component.
//!
//! Some components sit at fixed positions (the one-page Project Summary,
//! the fifteen-page Project Description). The rest appear in any order and
//! are found by fuzzy-matching the first lines of each page against the
//! catalog of expected component names.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> splitpdf::Result<()> {
//!     let report = splitpdf::split_file("proposal.pdf", "split_pdfs")?;
//!     for (component, path) in report.files() {
//!         println!("{}: {}", component, path.display());
//!     }
//!     for name in &report.missing {
//!         println!("not found: {}", name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Detection only
//!
//! The detection pipeline works on plain page text and needs no PDF:
//!
//! ```
//! use splitpdf::model::Page;
//! use splitpdf::section::{plan_sections, DetectOptions};
//! use splitpdf::Catalog;
//!
//! let mut texts = vec!["Project Summary".to_string()];
//! texts.extend((1..16).map(|i| format!("Narrative page {}", i)));
//! texts.push("References Cited".to_string());
//!
//! let pages = Page::sequence(texts);
//! let plan = plan_sections(&pages, &Catalog::proposal(), &DetectOptions::default())?;
//! assert_eq!(plan.len(), 3);
//! # Ok::<(), splitpdf::Error>(())
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod model;
pub mod pdf;
pub mod section;
pub mod split;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry, Detection, FixedRule};
pub use error::{Error, Result};
pub use model::{Boundary, BoundarySource, Page, SectionRange};
pub use pdf::{ErrorMode, PdfSource, SectionExtractor};
pub use section::{plan_sections, DetectOptions, SectionPlan, DEFAULT_SIMILARITY_THRESHOLD};
pub use split::{
    split_file, split_file_with_options, write_sections, JsonFormat, SectionFailure,
    SectionOutput, SplitOptions, SplitReport, Splitter,
};

use std::path::Path;

/// Detect component ranges of a PDF file without writing any output.
///
/// # Example
///
/// ```no_run
/// let plan = splitpdf::plan_file("proposal.pdf").unwrap();
/// for range in &plan.ranges {
///     println!("{}: {:?}", range.component_name, range.pages());
/// }
/// ```
pub fn plan_file<P: AsRef<Path>>(path: P) -> Result<SectionPlan> {
    Splitter::open(path)?.plan()
}

/// Extract the text of every page of a PDF file.
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<Page>> {
    PdfSource::open(path)?.pages(ErrorMode::Lenient)
}
