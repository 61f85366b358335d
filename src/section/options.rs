//! Detection options and configuration.

use super::similarity::DEFAULT_SIMILARITY_THRESHOLD;

/// Default number of header lines compared against catalog names.
pub const DEFAULT_HEADER_LINES: usize = 5;

/// Lines shorter than this are ignored when reading page headers.
pub const DEFAULT_MIN_LINE_CHARS: usize = 5;

/// Options for locating component boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectOptions {
    /// Minimum similarity score for accepting a header match
    pub threshold: f64,

    /// How many leading lines of a page form its header window
    pub header_lines: usize,

    /// Minimum characters for a line to count as a header candidate
    pub min_line_chars: usize,
}

impl DetectOptions {
    /// Create new detection options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity threshold (clamped to `[0, 1]`).
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the header window size (at least one line).
    pub fn with_header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines.max(1);
        self
    }

    /// Set the minimum header line length.
    pub fn with_min_line_chars(mut self, chars: usize) -> Self {
        self.min_line_chars = chars;
        self
    }
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            header_lines: DEFAULT_HEADER_LINES,
            min_line_chars: DEFAULT_MIN_LINE_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DetectOptions::default();
        assert_eq!(options.threshold, 0.70);
        assert_eq!(options.header_lines, 5);
        assert_eq!(options.min_line_chars, 5);
    }

    #[test]
    fn test_detect_options_builder() {
        let options = DetectOptions::new()
            .with_threshold(1.5)
            .with_header_lines(0)
            .with_min_line_chars(3);

        assert_eq!(options.threshold, 1.0);
        assert_eq!(options.header_lines, 1);
        assert_eq!(options.min_line_chars, 3);
    }
}
