//! Data model shared by the detection pipeline and the splitter.
//!
//! Pages are read once from the source document and never mutated.
//! Boundaries are derived from pages and the catalog, then turned into
//! section ranges that drive extraction.

mod page;
mod section;

pub use page::Page;
pub use section::{Boundary, BoundarySource, SectionRange};
