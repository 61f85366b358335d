//! Error types for splitpdf library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for splitpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while splitting a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Text could not be extracted from a page (strict mode only).
    #[error("Text extraction error on page {page}: {message}")]
    TextExtract {
        /// Zero-based page index
        page: usize,
        /// Underlying failure
        message: String,
    },

    /// The document is too short for the fixed-position rules.
    #[error("Document has {actual} pages but the fixed components require at least {required}")]
    Structure {
        /// Minimum page count demanded by the catalog
        required: usize,
        /// Page count of the document
        actual: usize,
    },

    /// Neither fixed rules nor text matching produced a single boundary.
    #[error("No component boundaries detected")]
    NoBoundaries,

    /// The component catalog is misconfigured.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The output directory could not be created.
    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Writing a single component failed.
    #[error("Failed to extract '{component}': {message}")]
    Extract {
        /// Component name from the catalog
        component: String,
        /// Underlying failure
        message: String,
    },

    /// Error serializing a report.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl Error {
    /// Whether this error aborts the whole split rather than a single component.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Extract { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Structure {
            required: 16,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Document has 3 pages but the fixed components require at least 16"
        );

        let err = Error::NoBoundaries;
        assert_eq!(err.to_string(), "No component boundaries detected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_extract_error_is_not_fatal() {
        let err = Error::Extract {
            component: "Mentoring Plan".to_string(),
            message: "disk full".to_string(),
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("Mentoring Plan"));
    }
}
