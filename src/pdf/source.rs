//! Source document access using lopdf.

use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};
use crate::format::{check_pdf_bytes, check_pdf_file, PdfHeader};
use crate::model::Page;

/// Error handling mode for page text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on the first page whose text cannot be extracted
    Strict,
    /// Treat unreadable pages as blank and continue
    #[default]
    Lenient,
}

/// An opened source PDF.
///
/// The document is loaded once and held until the source is dropped, so
/// every early return releases it.
pub struct PdfSource {
    doc: LopdfDocument,
    header: PdfHeader,
}

impl PdfSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a PDF before lopdf tries to parse it
        let header = check_pdf_file(path)?;
        let doc = LopdfDocument::load(path)?;
        Ok(Self::from_document(doc, header))
    }

    /// Open a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = check_pdf_bytes(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self::from_document(doc, header))
    }

    /// Open a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_document(doc: LopdfDocument, header: PdfHeader) -> Self {
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; page text may be unavailable");
        }
        log::debug!("Loaded {} with {} pages", header, doc.get_pages().len());
        Self { doc, header }
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Get the PDF version from the file header.
    pub fn version(&self) -> &str {
        &self.header.version
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Extract the text of one page (0-based index).
    pub fn page_text(&self, index: usize) -> Result<String> {
        let count = self.page_count();
        if index >= count {
            return Err(Error::TextExtract {
                page: index,
                message: format!("page out of range (document has {} pages)", count),
            });
        }
        self.doc
            .extract_text(&[index as u32 + 1])
            .map_err(|e| Error::TextExtract {
                page: index,
                message: e.to_string(),
            })
    }

    /// Extract the text of every page in document order.
    pub fn pages(&self, mode: ErrorMode) -> Result<Vec<Page>> {
        (0..self.page_count())
            .map(|index| match self.page_text(index) {
                Ok(text) => Ok(Page::new(index, text)),
                Err(e) if mode == ErrorMode::Lenient => {
                    log::warn!("Could not extract text from page {}: {}", index + 1, e);
                    Ok(Page::blank(index))
                }
                Err(e) => Err(e),
            })
            .collect()
    }

    /// Borrow the underlying lopdf document.
    pub fn document(&self) -> &LopdfDocument {
        &self.doc
    }
}

impl std::fmt::Debug for PdfSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfSource")
            .field("version", &self.header.version)
            .field("pages", &self.page_count())
            .finish()
    }
}
