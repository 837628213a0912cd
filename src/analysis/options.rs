//! Extraction options and the tuning constants behind them.

use crate::error::{Error, Result};

/// Maximum font size difference for a span to count as a title size.
pub const TITLE_SIZE_TOLERANCE: f64 = 0.3;

/// A title span must have strictly more characters than this.
pub const MIN_TITLE_CHARS: usize = 4;

/// Spans containing this text never contribute to the title.
pub const TITLE_EXCLUSION: &str = "arXiv";

/// An upper-case heading must have strictly more A-Z letters than this.
pub const MIN_UPPER_LETTERS: usize = 4;

/// Whole-word token (case-insensitive) that starts section segmentation.
pub const START_MARKER: &str = "Abstract";

/// Heading text that ends section segmentation, matched as written or in all caps.
pub const STOP_MARKER: &str = "References";

/// Options for title and section extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Title size tolerance in points
    pub title_tolerance: f64,

    /// Title spans need more characters than this
    pub min_title_chars: usize,

    /// Substring that disqualifies a title span
    pub title_exclusion: String,

    /// Upper-case headings need more A-Z letters than this
    pub min_upper_letters: usize,

    /// Token that opens the first section
    pub start_marker: String,

    /// Heading text that terminates segmentation
    pub stop_marker: String,

    /// What to do with a font heading whose size differs from the locked one
    pub heading_mismatch: HeadingMismatch,

    /// How the last open section is trimmed
    pub trim: TrimMode,

    /// Title supplied by the caller; skips title detection when set
    pub known_title: Option<String>,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title size tolerance.
    pub fn with_title_tolerance(mut self, tolerance: f64) -> Self {
        self.title_tolerance = tolerance;
        self
    }

    /// Set the minimum title span length.
    pub fn with_min_title_chars(mut self, chars: usize) -> Self {
        self.min_title_chars = chars;
        self
    }

    /// Set the title exclusion substring.
    pub fn with_title_exclusion(mut self, exclusion: impl Into<String>) -> Self {
        self.title_exclusion = exclusion.into();
        self
    }

    /// Set the minimum letter count of upper-case headings.
    pub fn with_min_upper_letters(mut self, letters: usize) -> Self {
        self.min_upper_letters = letters;
        self
    }

    /// Set the start marker.
    pub fn with_start_marker(mut self, marker: impl Into<String>) -> Self {
        self.start_marker = marker.into();
        self
    }

    /// Set the stop marker.
    pub fn with_stop_marker(mut self, marker: impl Into<String>) -> Self {
        self.stop_marker = marker.into();
        self
    }

    /// Set the heading mismatch policy.
    pub fn with_heading_mismatch(mut self, policy: HeadingMismatch) -> Self {
        self.heading_mismatch = policy;
        self
    }

    /// Set the trim mode.
    pub fn with_trim(mut self, trim: TrimMode) -> Self {
        self.trim = trim;
        self
    }

    /// Trim every section body, including the last one.
    pub fn uniform_trim(mut self) -> Self {
        self.trim = TrimMode::Uniform;
        self
    }

    /// Use a known title instead of detecting one.
    pub fn with_known_title(mut self, title: impl Into<String>) -> Self {
        self.known_title = Some(title.into());
        self
    }

    /// Check the options for values the analysis cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.title_tolerance.is_finite() || self.title_tolerance < 0.0 {
            return Err(Error::InvalidOptions(format!(
                "title tolerance must be a non-negative number, got {}",
                self.title_tolerance
            )));
        }
        if self.start_marker.trim().is_empty() {
            return Err(Error::InvalidOptions(
                "start marker cannot be empty".to_string(),
            ));
        }
        if self.stop_marker.trim().is_empty() {
            return Err(Error::InvalidOptions(
                "stop marker cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            title_tolerance: TITLE_SIZE_TOLERANCE,
            min_title_chars: MIN_TITLE_CHARS,
            title_exclusion: TITLE_EXCLUSION.to_string(),
            min_upper_letters: MIN_UPPER_LETTERS,
            start_marker: START_MARKER.to_string(),
            stop_marker: STOP_MARKER.to_string(),
            heading_mismatch: HeadingMismatch::Drop,
            trim: TrimMode::Compatible,
            known_title: None,
        }
    }
}

/// Handling of a font-size heading whose size differs from the locked heading font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingMismatch {
    /// Discard the span: it becomes neither heading nor body
    #[default]
    Drop,
    /// Append the span to the current section body
    AsBody,
}

/// Trimming of section bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimMode {
    /// Trim a body when the next heading opens; the last body stays as accumulated
    #[default]
    Compatible,
    /// Trim every body, including the one open when the spans run out
    Uniform,
}
