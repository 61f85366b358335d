//! Splitting orchestration: open, plan, then write one PDF per component.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::model::{Page, SectionRange};
use crate::pdf::{output_filename, ErrorMode, PdfSource, SectionExtractor};
use crate::section::{plan_sections, DetectOptions, SectionPlan};

/// Options for splitting a document.
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Boundary detection options
    pub detect: DetectOptions,

    /// How to treat pages whose text cannot be extracted
    pub error_mode: ErrorMode,
}

impl SplitOptions {
    /// Create new split options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set detection options.
    pub fn with_detect_options(mut self, detect: DetectOptions) -> Self {
        self.detect = detect;
        self
    }

    /// Set the similarity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.detect = self.detect.with_threshold(threshold);
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Abort on the first unreadable page.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Treat unreadable pages as blank.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// A component written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOutput {
    /// Catalog name of the component
    pub component_name: String,
    /// Written file
    pub path: PathBuf,
    /// First page (0-based, inclusive)
    pub start_page: usize,
    /// One past the last page
    pub end_page: usize,
}

/// A detected component that could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFailure {
    /// Catalog name of the component
    pub component_name: String,
    /// Why extraction failed
    pub message: String,
}

/// Outcome of a split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    /// Total pages in the source document
    pub page_count: usize,

    /// Written components, in page order
    pub outputs: Vec<SectionOutput>,

    /// Detected components whose extraction failed
    pub failures: Vec<SectionFailure>,

    /// Variable components never found in the document
    pub missing: Vec<String>,
}

impl SplitReport {
    /// Start an empty report for a plan.
    pub fn for_plan(plan: &SectionPlan) -> Self {
        Self {
            page_count: plan.page_count,
            outputs: Vec::new(),
            failures: Vec::new(),
            missing: plan.missing.clone(),
        }
    }

    /// Record the outcome of extracting one range.
    pub fn record(&mut self, range: &SectionRange, outcome: Result<PathBuf>) {
        match outcome {
            Ok(path) => self.outputs.push(SectionOutput {
                component_name: range.component_name.clone(),
                path,
                start_page: range.start_page,
                end_page: range.end_page,
            }),
            Err(e) => {
                log::error!("{}", e);
                let message = match e {
                    Error::Extract { message, .. } => message,
                    other => other.to_string(),
                };
                self.failures.push(SectionFailure {
                    component_name: range.component_name.clone(),
                    message,
                });
            }
        }
    }

    /// `(component_name, path)` pairs of written components, in page order.
    pub fn files(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.outputs
            .iter()
            .map(|o| (o.component_name.as_str(), o.path.as_path()))
    }

    /// Check if every detected component was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Serialize the report.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };

        result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
    }
}

/// Create the output directory if it does not exist.
pub fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir).map_err(|source| Error::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })
}

/// Write every range of a plan into `output_dir`.
///
/// A failure on one range is recorded and the remaining ranges are still
/// attempted. Only a missing, uncreatable output directory aborts.
pub fn write_sections<E>(extractor: &E, plan: &SectionPlan, output_dir: &Path) -> Result<SplitReport>
where
    E: SectionExtractor + ?Sized,
{
    prepare_output_dir(output_dir)?;

    let mut report = SplitReport::for_plan(plan);
    for range in &plan.ranges {
        let dest = output_dir.join(output_filename(&range.component_name));
        let outcome = extractor.extract_section(range, &dest).map(|()| dest);
        report.record(range, outcome);
    }

    Ok(report)
}

/// Splits one source document according to a catalog.
#[derive(Debug)]
pub struct Splitter {
    source: PdfSource,
    catalog: Catalog,
    options: SplitOptions,
}

impl Splitter {
    /// Open a PDF with the proposal catalog and default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, Catalog::proposal(), SplitOptions::default())
    }

    /// Open a PDF with a custom catalog and options.
    pub fn open_with<P: AsRef<Path>>(
        path: P,
        catalog: Catalog,
        options: SplitOptions,
    ) -> Result<Self> {
        let source = PdfSource::open(path)?;
        Ok(Self::new(source, catalog, options))
    }

    /// Wrap an already opened source.
    pub fn new(source: PdfSource, catalog: Catalog, options: SplitOptions) -> Self {
        Self {
            source,
            catalog,
            options,
        }
    }

    /// The opened source document.
    pub fn source(&self) -> &PdfSource {
        &self.source
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Extract the text of every page.
    pub fn pages(&self) -> Result<Vec<Page>> {
        self.source.pages(self.options.error_mode)
    }

    /// Detect component ranges without writing anything.
    pub fn plan(&self) -> Result<SectionPlan> {
        let pages = self.pages()?;
        plan_sections(&pages, &self.catalog, &self.options.detect)
    }

    /// Write one range into `output_dir`, returning the written path.
    pub fn extract(&self, range: &SectionRange, output_dir: &Path) -> Result<PathBuf> {
        let dest = output_dir.join(output_filename(&range.component_name));
        self.source.extract_section(range, &dest)?;
        Ok(dest)
    }

    /// Detect components and write each one into `output_dir`.
    ///
    /// Detection errors abort before the directory is touched.
    pub fn split<P: AsRef<Path>>(&self, output_dir: P) -> Result<SplitReport> {
        let plan = self.plan()?;
        write_sections(&self.source, &plan, output_dir.as_ref())
    }
}

/// Split a PDF into one file per detected component.
///
/// Returns the report of written files in page order. Components never
/// found are listed in [`SplitReport::missing`]; components that were
/// found but could not be written are listed in [`SplitReport::failures`].
pub fn split_file<P, Q>(input: P, output_dir: Q) -> Result<SplitReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Splitter::open(input)?.split(output_dir)
}

/// Split a PDF with a custom catalog and options.
pub fn split_file_with_options<P, Q>(
    input: P,
    output_dir: Q,
    catalog: Catalog,
    options: SplitOptions,
) -> Result<SplitReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    Splitter::open_with(input, catalog, options)?.split(output_dir)
}
