//! Section segmentation: a single pass over the span stream that splits the
//! text after the abstract marker into named sections.
//!
//! Two heading styles are recognised and they exclude each other. Once an
//! upper-case heading is seen, font-size headings are never considered
//! again, and vice versa. Font-size headings lock the size of the first one;
//! later candidates must match it exactly.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Block, Document, SectionTable, Span};

use super::{ExtractOptions, HeadingMismatch, TrimMode};

/// How segmentation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The stop heading was reached
    StopMarker,
    /// The span stream ran out
    Exhausted,
    /// The start marker never appeared
    NoStartMarker,
}

/// Output of one segmentation pass.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// Sections in order of first occurrence
    pub sections: SectionTable,
    /// Why the pass stopped
    pub termination: Termination,
}

/// What one span did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Heading,
    Body,
    Dropped,
    Stop,
}

/// Running state of a segmentation pass.
#[derive(Debug, Clone, Default)]
pub struct SegmenterState {
    /// The start marker has been seen
    pub found_abstract: bool,
    /// Size of the first font-size heading
    pub heading_font: Option<f64>,
    /// An upper-case heading has been seen
    pub upper_heading_seen: bool,
    /// A font-size heading candidate has been seen
    pub font_heading_seen: bool,
    /// Section receiving body text
    pub current_heading: Option<String>,
    /// Accumulated sections
    pub table: SectionTable,
}

impl SegmenterState {
    fn start(&mut self, name: &str) {
        self.found_abstract = true;
        self.table.open(name);
        self.current_heading = Some(name.to_string());
    }

    fn close_current(&mut self) {
        if let Some(current) = &self.current_heading {
            self.table.trim(current);
        }
    }

    fn open_heading(&mut self, name: &str) {
        self.close_current();
        self.table.open(name);
        self.current_heading = Some(name.to_string());
    }

    fn append(&mut self, text: &str) -> Step {
        match &self.current_heading {
            Some(current) => {
                self.table.append(current, " ");
                self.table.append(current, text);
                Step::Body
            }
            None => Step::Dropped,
        }
    }
}

/// Splits a document into sections using casing and font-size signals.
pub struct SectionSegmenter<'a> {
    threshold: f64,
    options: &'a ExtractOptions,
    start_marker: Regex,
    title_case: Regex,
    stop_markers: [String; 2],
}

impl<'a> SectionSegmenter<'a> {
    /// Create a segmenter. `threshold` is the body (mode) font size.
    pub fn new(threshold: f64, options: &'a ExtractOptions) -> Result<Self> {
        let start_marker = Regex::new(&format!(
            r"(?i)\b{}\b",
            regex::escape(options.start_marker.trim())
        ))
        .map_err(|e| Error::InvalidOptions(e.to_string()))?;

        Ok(Self {
            threshold,
            options,
            start_marker,
            title_case: Regex::new(r"^[A-Z][a-z]+(?:\s[A-Z][a-z]+)*").unwrap(),
            stop_markers: [
                options.stop_marker.trim().to_string(),
                options.stop_marker.trim().to_uppercase(),
            ],
        })
    }

    /// Run one pass over the document.
    pub fn segment(&self, doc: &Document) -> Segmentation {
        let mut state = SegmenterState::default();

        for (page_index, page) in doc.pages.iter().enumerate() {
            for block in &page.blocks {
                let mut skip = 0;
                if !state.found_abstract {
                    let Some(consumed) = self.find_start(block) else {
                        continue;
                    };
                    log::debug!("Start marker found on page {}", page_index);
                    state.start(&self.options.start_marker);
                    skip = consumed;
                }

                for span in block.spans().skip(skip) {
                    if self.step(&mut state, span) == Step::Stop {
                        log::debug!("Stop marker reached on page {}", page_index);
                        return Segmentation {
                            sections: state.table,
                            termination: Termination::StopMarker,
                        };
                    }
                }
            }
        }

        if !state.found_abstract {
            log::warn!(
                "No {:?} marker found; no sections extracted",
                self.options.start_marker
            );
            return Segmentation {
                sections: state.table,
                termination: Termination::NoStartMarker,
            };
        }

        if self.options.trim == TrimMode::Uniform {
            state.close_current();
        }
        Segmentation {
            sections: state.table,
            termination: Termination::Exhausted,
        }
    }

    /// Number of leading spans of `block` consumed by the start marker.
    ///
    /// `None` if the block does not contain the marker. When the marker only
    /// shows up across span boundaries the whole block is consumed.
    fn find_start(&self, block: &Block) -> Option<usize> {
        if let Some(index) = block
            .spans()
            .position(|span| self.start_marker.is_match(&span.text))
        {
            return Some(index + 1);
        }
        if self.start_marker.is_match(&block.raw_text()) {
            return Some(block.spans().count());
        }
        None
    }

    fn step(&self, state: &mut SegmenterState, span: &Span) -> Step {
        let text = span.text.trim();

        if !state.font_heading_seen && self.is_upper_heading(text) {
            state.upper_heading_seen = true;
            return self.heading(state, text);
        }

        if !state.upper_heading_seen && self.is_font_heading(span.font_size, text) {
            state.font_heading_seen = true;
            match state.heading_font {
                None => state.heading_font = Some(span.font_size),
                Some(locked) if locked != span.font_size => {
                    log::debug!(
                        "Heading candidate {:?} at {}pt does not match locked {}pt",
                        text,
                        span.font_size,
                        locked
                    );
                    return match self.options.heading_mismatch {
                        HeadingMismatch::Drop => Step::Dropped,
                        HeadingMismatch::AsBody => state.append(text),
                    };
                }
                Some(_) => {}
            }
            return self.heading(state, text);
        }

        state.append(text)
    }

    fn heading(&self, state: &mut SegmenterState, text: &str) -> Step {
        if self.is_stop_heading(text) {
            state.close_current();
            return Step::Stop;
        }
        log::debug!("Section heading: {:?}", text);
        state.open_heading(text);
        Step::Heading
    }

    /// Heading text containing the stop marker as written or in all caps.
    pub fn is_stop_heading(&self, text: &str) -> bool {
        self.stop_markers
            .iter()
            .any(|marker| text.contains(marker.as_str()))
    }

    /// Entirely upper-case text with enough A-Z letters.
    pub fn is_upper_heading(&self, text: &str) -> bool {
        let has_upper = text.chars().any(char::is_uppercase);
        let has_lower = text.chars().any(char::is_lowercase);
        let letters = text.chars().filter(|c| c.is_ascii_uppercase()).count();
        has_upper && !has_lower && letters > self.options.min_upper_letters
    }

    /// Larger than body text and starting with capitalised words.
    pub fn is_font_heading(&self, font_size: f64, text: &str) -> bool {
        font_size > self.threshold && self.title_case.is_match(text)
    }
}
