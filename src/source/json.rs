//! Span dumps serialized as JSON.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::detect::{detect_layout_from_bytes, strip_bom};
use crate::error::Result;
use crate::model::{Document, Page};

use super::DocumentSource;

/// Reads documents from JSON span dumps written by an external renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSource;

impl JsonSource {
    /// Create a new JSON source.
    pub fn new() -> Self {
        Self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpanDump {
    Document(Document),
    Pages(Vec<Page>),
}

impl DocumentSource for JsonSource {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn load(&self, path: &Path) -> Result<Document> {
        let data = fs::read(path)?;
        self.load_bytes(&data)
    }

    fn load_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let layout = detect_layout_from_bytes(bytes)?;
        log::debug!("Loading span dump ({})", layout);

        let document = match serde_json::from_slice(strip_bom(bytes))? {
            SpanDump::Document(doc) => doc,
            SpanDump::Pages(pages) => Document::from_pages(pages),
        };
        log::debug!(
            "Loaded {} pages, {} spans",
            document.page_count(),
            document.span_count()
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_load_document_object() {
        let json = br#"{"pages": [{"width": 612, "blocks": [
            {"type": 0, "lines": [{"spans": [{"text": "Hello", "size": 12.0}]}]},
            {"type": 1, "bbox": [0, 0, 10, 10]}
        ]}]}"#;
        let doc = JsonSource::new().load_bytes(json).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.pages[0].width, Some(612.0));
        assert_eq!(doc.span_count(), 1);
        assert!(!doc.pages[0].blocks[1].is_text());
    }

    #[test]
    fn test_load_page_list() {
        let json = br#"[{"blocks": []}, {"blocks": [{"lines": [{"spans": [{"text": "x", "size": 9}]}]}]}]"#;
        let doc = JsonSource::new().load_bytes(json).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.span_count(), 1);
    }

    #[test]
    fn test_load_rejects_non_json() {
        let result = JsonSource::new().load_bytes(b"not json");
        assert!(matches!(result, Err(Error::UnknownFormat)));

        let result = JsonSource::new().load_bytes(b"{\"pages\": 3}");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
