//! Document-level types of the span stream.

use super::{Block, Span};
use serde::{Deserialize, Serialize};

/// A rendered document: pages of blocks of lines of spans.
///
/// Produced by an external renderer and only ever borrowed by the analysis
/// code, which never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in reading order
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from its pages.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over every span in document order (page, block, line, span).
    pub fn spans(&self) -> impl Iterator<Item = &Span> + '_ {
        self.pages.iter().flat_map(|page| page.spans())
    }

    /// Total number of spans in the document.
    pub fn span_count(&self) -> usize {
        self.spans().count()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A single rendered page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page width in points, when the renderer reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Page height in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Blocks in renderer order
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create a new empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page from its blocks.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Default::default()
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over every span on the page.
    pub fn spans(&self) -> impl Iterator<Item = &Span> + '_ {
        self.blocks.iter().flat_map(|block| block.spans())
    }

    /// Get plain text content of the page.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter(|block| block.is_text())
            .map(|block| block.raw_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Line};

    fn sample() -> Document {
        let mut page = Page::new();
        page.add_block(Block::text(vec![
            Line::new(vec![Span::new("Hello", 10.0), Span::new(" world", 10.0)]),
            Line::new(vec![Span::new("Again", 12.0)]),
        ]));
        page.add_block(Block::image());
        Document::from_pages(vec![page, Page::new()])
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.span_count(), 0);
    }

    #[test]
    fn test_span_iteration_order() {
        let doc = sample();
        let texts: Vec<&str> = doc.spans().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello", " world", "Again"]);
        assert_eq!(doc.span_count(), 3);
    }

    #[test]
    fn test_plain_text_skips_images_and_empty_pages() {
        let doc = sample();
        assert_eq!(doc.plain_text(), "Hello world\nAgain\n\n");
        assert_eq!(doc.pages[0].plain_text(), "Hello world\nAgain");
    }
}
