//! Page-level types.

use serde::{Deserialize, Serialize};

/// Extracted text of one physical page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page index (0-based, document order)
    pub index: usize,

    /// Raw text as extracted from the PDF
    pub text: String,
}

impl Page {
    /// Create a page from its index and text.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Create a page without any text (e.g. a scanned image page).
    pub fn blank(index: usize) -> Self {
        Self::new(index, String::new())
    }

    /// Build a page sequence from texts in document order.
    pub fn sequence<I, S>(texts: I) -> Vec<Page>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Page::new(index, text))
            .collect()
    }

    /// 1-based page number, as shown by PDF viewers.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Check if the page has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
