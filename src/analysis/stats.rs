//! Font statistics over the whole span stream.

use crate::error::{Error, Result};
use crate::model::Document;

/// Font size statistics for title and heading detection.
#[derive(Debug, Clone, Default)]
pub struct FontStatistics {
    /// Distinct font sizes with their frequency, in order of first appearance
    pub size_histogram: Vec<(f64, usize)>,
    /// Body text font size (most common)
    pub body_size: f64,
    /// The two largest distinct sizes, ascending
    pub largest_sizes: [f64; 2],
    /// Number of spans observed
    pub span_count: usize,
}

impl FontStatistics {
    /// Scan every span of a document once.
    ///
    /// Fails with [`Error::EmptyDocument`] when there is no span at all.
    pub fn collect(doc: &Document) -> Result<Self> {
        let mut stats = Self::default();
        for span in doc.spans() {
            stats.add_size(span.font_size);
        }
        if stats.span_count == 0 {
            return Err(Error::EmptyDocument);
        }
        stats.analyze();

        log::debug!(
            "Font statistics: {} spans, {} distinct sizes, body {}, largest {:?}",
            stats.span_count,
            stats.size_histogram.len(),
            stats.body_size,
            stats.largest_sizes
        );
        Ok(stats)
    }

    /// Add a font size observation.
    ///
    /// Sizes are counted by exact value; tolerance only applies to matching.
    pub fn add_size(&mut self, size: f64) {
        self.span_count += 1;
        match self.size_histogram.iter_mut().find(|(s, _)| *s == size) {
            Some((_, count)) => *count += 1,
            None => self.size_histogram.push((size, 1)),
        }
    }

    /// Calculate body size and the two largest sizes.
    pub fn analyze(&mut self) {
        // Strictly greater keeps the earliest size on ties.
        let mut best: Option<(f64, usize)> = None;
        for &(size, count) in &self.size_histogram {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((size, count));
            }
        }
        self.body_size = best.map(|(size, _)| size).unwrap_or_default();

        let mut sizes: Vec<f64> = self
            .size_histogram
            .iter()
            .map(|(size, _)| *size)
            .filter(|size| !size.is_nan())
            .collect();
        sizes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        self.largest_sizes = match sizes.as_slice() {
            [] => [0.0, 0.0],
            [only] => [*only, *only],
            [.., second, first] => [*second, *first],
        };
    }

    /// Most frequent font size, used as the body-text threshold.
    pub fn mode_size(&self) -> f64 {
        self.body_size
    }

    /// The two largest distinct sizes in ascending order.
    ///
    /// With a single distinct size both entries hold that size.
    pub fn max_sizes(&self) -> [f64; 2] {
        self.largest_sizes
    }

    /// Number of distinct sizes observed.
    pub fn distinct_sizes(&self) -> usize {
        self.size_histogram.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Line, Page, Span};

    fn doc_with_sizes(sizes: &[f64]) -> Document {
        let spans = sizes.iter().map(|s| Span::new("text", *s)).collect();
        Document::from_pages(vec![Page::with_blocks(vec![Block::text(vec![Line::new(
            spans,
        )])])])
    }

    #[test]
    fn test_font_statistics() {
        let mut stats = FontStatistics::default();
        for _ in 0..100 {
            stats.add_size(12.0);
        }
        for _ in 0..5 {
            stats.add_size(18.0);
        }
        for _ in 0..3 {
            stats.add_size(24.0);
        }
        stats.analyze();

        assert_eq!(stats.mode_size(), 12.0);
        assert_eq!(stats.max_sizes(), [18.0, 24.0]);
        assert_eq!(stats.distinct_sizes(), 3);
        assert_eq!(stats.span_count, 108);
    }

    #[test]
    fn test_mode_tie_keeps_first_seen() {
        let stats = FontStatistics::collect(&doc_with_sizes(&[11.0, 9.0, 9.0, 11.0])).unwrap();
        assert_eq!(stats.mode_size(), 11.0);

        let stats = FontStatistics::collect(&doc_with_sizes(&[9.0, 11.0, 11.0, 9.0])).unwrap();
        assert_eq!(stats.mode_size(), 9.0);
    }

    #[test]
    fn test_single_size_duplicates_max() {
        let stats = FontStatistics::collect(&doc_with_sizes(&[10.0, 10.0])).unwrap();
        assert_eq!(stats.max_sizes(), [10.0, 10.0]);
    }

    #[test]
    fn test_empty_document_fails() {
        let doc = Document::from_pages(vec![Page::with_blocks(vec![Block::image()])]);
        assert!(matches!(
            FontStatistics::collect(&doc),
            Err(Error::EmptyDocument)
        ));
        assert!(matches!(
            FontStatistics::collect(&Document::new()),
            Err(Error::EmptyDocument)
        ));
    }

    #[test]
    fn test_sizes_are_counted_exactly() {
        let stats = FontStatistics::collect(&doc_with_sizes(&[10.0, 10.1, 10.1])).unwrap();
        assert_eq!(stats.distinct_sizes(), 2);
        assert_eq!(stats.mode_size(), 10.1);
    }
}
