//! PDF access through lopdf: page text in, per-component documents out.

mod extract;
mod naming;
mod source;

pub use extract::SectionExtractor;
pub use naming::{output_filename, sanitize_filename};
pub use source::{ErrorMode, PdfSource};
