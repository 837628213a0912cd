//! Document model types.
//!
//! The span stream (`Document` → `Page` → `Block` → `Line` → `Span`) is the
//! read-only input handed over by an external renderer. The extraction
//! types are the flat, serializable output of the analysis.

mod block;
mod document;
mod extraction;

pub use block::{Block, BlockKind, Line, Span};
pub use document::{Document, Page};
pub use extraction::{Extraction, Section, SectionTable, TitleResult, TITLE_KEY};
