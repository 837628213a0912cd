//! Error types for papersect.

use std::io;
use thiserror::Error;

/// Result type alias for papersect operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or analysing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The document contains no spans, so no font statistics exist.
    #[error("Document contains no text spans")]
    EmptyDocument,

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The span dump is not valid JSON or does not have the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not recognized as a span dump.
    #[error("Unknown input format: not a span dump")]
    UnknownFormat,

    /// Extraction options are inconsistent.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The text is not an arXiv abstract or PDF link.
    #[error("Invalid arXiv link: {0}")]
    InvalidLink(String),

    /// The link looks like an arXiv link but carries no usable identifier.
    #[error("Invalid arXiv ID format: {0}")]
    InvalidArxivId(String),

    /// No document source is registered for the input.
    #[error("Unsupported source: {0}")]
    UnsupportedSource(String),

    /// Error during rendering (Markdown, JSON, digest).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
