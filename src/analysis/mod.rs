//! Font-signal structure analysis.
//!
//! Everything here is a pure pass over a borrowed [`Document`](crate::model::Document):
//! font statistics first, then title detection and section segmentation.

mod chapters;
mod options;
mod sections;
mod stats;
mod title;

pub use chapters::{chapter_names, is_chapter_line, MAX_DIGIT_CHAPTER, ROMAN_NUMERALS};
pub use options::{
    ExtractOptions, HeadingMismatch, TrimMode, MIN_TITLE_CHARS, MIN_UPPER_LETTERS, START_MARKER,
    STOP_MARKER, TITLE_EXCLUSION, TITLE_SIZE_TOLERANCE,
};
pub use sections::{SectionSegmenter, SegmenterState, Segmentation, Termination};
pub use stats::FontStatistics;
pub use title::TitleExtractor;
