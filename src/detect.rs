//! Span dump format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// UTF-8 byte order mark, tolerated in front of a dump.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Maximum number of leading bytes inspected when sniffing a file.
const SNIFF_LEN: usize = 1024;

/// Top-level shape of a span dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpLayout {
    /// A document object: `{"pages": [...]}`
    Document,
    /// A bare array of page objects, one renderer dump per page
    PageList,
}

impl std::fmt::Display for DumpLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DumpLayout::Document => write!(f, "document object"),
            DumpLayout::PageList => write!(f, "page list"),
        }
    }
}

/// Detect the dump layout of a file.
///
/// # Example
/// ```no_run
/// use papersect::detect::detect_layout_from_path;
///
/// let layout = detect_layout_from_path("paper.json").unwrap();
/// println!("Layout: {}", layout);
/// ```
pub fn detect_layout_from_path<P: AsRef<Path>>(path: P) -> Result<DumpLayout> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    BufReader::new(file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_layout_from_bytes(&header)
}

/// Detect the dump layout from the leading bytes of the input.
///
/// Only the first significant byte is inspected; the content itself is
/// validated when it is deserialized.
pub fn detect_layout_from_bytes(data: &[u8]) -> Result<DumpLayout> {
    let data = strip_bom(data);
    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(DumpLayout::Document),
        Some(b'[') => Ok(DumpLayout::PageList),
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if bytes look like a span dump.
pub fn is_span_dump_bytes(data: &[u8]) -> bool {
    detect_layout_from_bytes(data).is_ok()
}

/// Strip a leading UTF-8 byte order mark.
pub fn strip_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}
