//! Title detection from the largest font sizes.

use crate::model::{Document, Span, TitleResult};

use super::ExtractOptions;

/// Assembles a title from block-leading spans set in one of the two largest sizes.
pub struct TitleExtractor<'a> {
    max_sizes: [f64; 2],
    options: &'a ExtractOptions,
}

impl<'a> TitleExtractor<'a> {
    /// Create a title extractor for the given largest sizes.
    pub fn new(max_sizes: [f64; 2], options: &'a ExtractOptions) -> Self {
        Self { max_sizes, options }
    }

    /// Scan the first span of the first line of every block.
    ///
    /// `title_page` ends up as the page of the last qualifying span, not the first.
    pub fn extract(&self, doc: &Document) -> TitleResult {
        let mut title = String::new();
        let mut title_page = 0;

        for (page_index, page) in doc.pages.iter().enumerate() {
            for block in page.blocks.iter().filter(|b| b.is_text()) {
                let Some(span) = block.first_span() else {
                    continue;
                };
                if !self.qualifies(span) {
                    continue;
                }

                log::debug!(
                    "Title candidate on page {}: {:?} ({}pt)",
                    page_index,
                    span.text,
                    span.font_size
                );
                if !title.is_empty() {
                    title.push(' ');
                }
                title.push_str(&span.text);
                title_page = page_index;
            }
        }

        if title.is_empty() {
            log::warn!("No span qualified as title text");
        }

        TitleResult::new(title.replace('\n', " "), title_page)
    }

    /// Check whether a span can contribute to the title.
    pub fn qualifies(&self, span: &Span) -> bool {
        let tolerance = self.options.title_tolerance;
        let size_matches = self
            .max_sizes
            .iter()
            .any(|max| (span.font_size - max).abs() < tolerance);

        size_matches
            && span.text.chars().count() > self.options.min_title_chars
            && !span.text.contains(self.options.title_exclusion.as_str())
    }
}
