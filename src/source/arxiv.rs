//! arXiv link parsing.
//!
//! Only turns a pasted link into an identifier and canonical URLs; fetching
//! and rendering the PDF is left to the caller.

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};

/// An arXiv identifier such as `2401.01234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArxivId(String);

impl ArxivId {
    /// Parse an identifier out of an abstract-page or PDF link.
    ///
    /// Links mentioning `abs` are matched as abstract links first, then
    /// links mentioning `pdf` as PDF links.
    pub fn parse(link: &str) -> Result<Self> {
        let link = link.trim();
        if link.is_empty() {
            return Err(Error::InvalidLink("empty input".to_string()));
        }

        let pattern = if link.contains("abs") {
            r"arxiv\.org/abs/(\d+\.\d+)"
        } else if link.contains("pdf") {
            r"arxiv\.org/pdf/(\d+\.\d+)"
        } else {
            return Err(Error::InvalidLink(link.to_string()));
        };

        Regex::new(pattern)
            .unwrap()
            .captures(link)
            .and_then(|caps| caps.get(1))
            .map(|id| Self(id.as_str().to_string()))
            .ok_or_else(|| Error::InvalidArxivId(link.to_string()))
    }

    /// The bare identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the PDF.
    pub fn pdf_url(&self) -> String {
        format!("https://arxiv.org/pdf/{}.pdf", self.0)
    }

    /// URL of the abstract page.
    pub fn abs_url(&self) -> String {
        format!("https://arxiv.org/abs/{}", self.0)
    }
}

impl fmt::Display for ArxivId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_abs_link() {
        let id = ArxivId::parse("see https://arxiv.org/abs/2401.01234v2 please").unwrap();
        assert_eq!(id.as_str(), "2401.01234");
        assert_eq!(id.pdf_url(), "https://arxiv.org/pdf/2401.01234.pdf");
        assert_eq!(id.abs_url(), "https://arxiv.org/abs/2401.01234");
    }

    #[test]
    fn test_parse_pdf_link() {
        let id = ArxivId::parse("https://arxiv.org/pdf/1706.03762").unwrap();
        assert_eq!(id.to_string(), "1706.03762");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(ArxivId::parse("  "), Err(Error::InvalidLink(_))));
        assert!(matches!(
            ArxivId::parse("https://example.com/paper"),
            Err(Error::InvalidLink(_))
        ));
        assert!(matches!(
            ArxivId::parse("https://arxiv.org/abs/hep-th"),
            Err(Error::InvalidArxivId(_))
        ));
    }

    #[test]
    fn test_abs_takes_precedence_over_pdf() {
        // Mentions both; the abs pattern is tried and does not match.
        let result = ArxivId::parse("https://arxiv.org/pdf/2401.01234 (abs)");
        assert!(matches!(result, Err(Error::InvalidArxivId(_))));
    }
}
