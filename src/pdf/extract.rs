//! Writing a page range of the source document to a new PDF.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::SectionRange;

use super::source::PdfSource;

/// Something that can persist one section range as its own document.
///
/// Each call is independent: a failure for one range never affects
/// another.
pub trait SectionExtractor {
    /// Copy pages `[range.start_page, range.end_page)` into a new document at `dest`.
    fn extract_section(&self, range: &SectionRange, dest: &Path) -> Result<()>;
}

impl SectionExtractor for PdfSource {
    fn extract_section(&self, range: &SectionRange, dest: &Path) -> Result<()> {
        let fail = |message: String| Error::Extract {
            component: range.component_name.clone(),
            message,
        };

        let total = self.page_count();
        if range.is_empty() || range.end_page > total {
            return Err(fail(format!(
                "invalid page range {}..{} for a {}-page document",
                range.start_page, range.end_page, total
            )));
        }

        // lopdf page numbers are 1-based
        let unwanted: Vec<u32> = (1..=total as u32)
            .filter(|number| !range.contains(*number as usize - 1))
            .collect();

        let mut doc = self.document().clone();
        if !unwanted.is_empty() {
            doc.delete_pages(&unwanted);
        }
        doc.prune_objects();
        doc.renumber_objects();

        doc.save(dest).map_err(|e| fail(e.to_string()))?;

        let (first, last) = range.display_span();
        log::info!(
            "Created: {} (pages {}-{}, {} pages)",
            dest.display(),
            first,
            last,
            range.len()
        );
        Ok(())
    }
}
