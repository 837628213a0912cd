//! # papersect
//!
//! Recover the title and section structure of a rendered document from
//! typographic signals alone.
//!
//! The input is the span stream of an external renderer: pages of blocks of
//! lines of spans, each span carrying text and a font size. No outline,
//! table of contents or markup is used. The title is assembled from
//! block-leading spans set in the largest fonts; sections start at the
//! abstract marker and are split at upper-case or larger-than-body
//! headings until the references heading.
//!
//! ## Quick Start
//!
//! ```no_run
//! use papersect::{extract_file, render};
//!
//! fn main() -> papersect::Result<()> {
//!     let extraction = extract_file("paper.json")?;
//!
//!     println!("{}", extraction.title);
//!     for name in extraction.section_names() {
//!         println!("  {}", name);
//!     }
//!
//!     let markdown = render::to_markdown(&extraction, &render::RenderOptions::default())?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Font statistics**: body size and the two largest sizes in one pass
//! - **Title detection**: tolerance-based size matching on block-leading spans
//! - **Section segmentation**: upper-case and font-size headings, locked heading font
//! - **Parallel batches**: one independent extraction per document via Rayon
//! - **Output formats**: JSON, Markdown, and a flat digest for summarizers

pub mod analysis;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use analysis::{
    chapter_names, ExtractOptions, FontStatistics, HeadingMismatch, SectionSegmenter,
    Termination, TitleExtractor, TrimMode,
};
pub use detect::{detect_layout_from_bytes, detect_layout_from_path, DumpLayout};
pub use error::{Error, Result};
pub use model::{
    Block, BlockKind, Document, Extraction, Line, Page, Section, SectionTable, Span, TitleResult,
};
pub use render::{CleanupPreset, JsonFormat, RenderOptions};
pub use source::{ArxivId, DocumentSource, JsonSource, SourceRegistry};

use rayon::prelude::*;
use std::path::Path;

/// Extract title and sections with default options.
///
/// # Example
///
/// ```
/// use papersect::{extract, Block, Document, Line, Page, Span};
///
/// let block = |text: &str, size: f64| Block::text(vec![Line::new(vec![Span::new(text, size)])]);
/// let doc = Document::from_pages(vec![Page::with_blocks(vec![
///     block("A Study of Things", 18.0),
///     block("Abstract", 10.0),
///     block("We study things.", 10.0),
/// ])]);
///
/// let extraction = extract(&doc).unwrap();
/// assert_eq!(extraction.section_names(), vec!["Abstract"]);
/// ```
pub fn extract(doc: &Document) -> Result<Extraction> {
    extract_with_options(doc, &ExtractOptions::default())
}

/// Extract title and sections with custom options.
///
/// Font statistics run first, so a document without spans fails with
/// [`Error::EmptyDocument`] before any title or section logic. A missing
/// abstract marker is not an error: the result simply has no sections.
pub fn extract_with_options(doc: &Document, options: &ExtractOptions) -> Result<Extraction> {
    options.validate()?;

    let stats = FontStatistics::collect(doc)?;

    let title = match &options.known_title {
        Some(known) => TitleResult::new(known.clone(), 0),
        None => TitleExtractor::new(stats.max_sizes(), options).extract(doc),
    };

    let segmentation = SectionSegmenter::new(stats.mode_size(), options)?.segment(doc);
    log::debug!(
        "Extracted {} sections ({:?})",
        segmentation.sections.len(),
        segmentation.termination
    );

    Ok(Extraction::new(title, segmentation.sections))
}

/// Load a span dump file and extract from it.
///
/// # Example
///
/// ```no_run
/// use papersect::extract_file;
///
/// let extraction = extract_file("paper.json").unwrap();
/// println!("Title: {}", extraction.title);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    extract_file_with_options(path, &ExtractOptions::default())
}

/// Load a span dump file and extract from it with custom options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<Extraction> {
    let doc = SourceRegistry::with_defaults().load(path.as_ref())?;
    extract_with_options(&doc, options)
}

/// Extract from a JSON span dump held in memory.
pub fn extract_bytes(data: &[u8]) -> Result<Extraction> {
    let doc = JsonSource::new().load_bytes(data)?;
    extract(&doc)
}

/// Extract from many documents in parallel.
///
/// Each document is analysed independently; the output order matches the input.
pub fn extract_batch(docs: &[Document], options: &ExtractOptions) -> Vec<Result<Extraction>> {
    docs.par_iter()
        .map(|doc| extract_with_options(doc, options))
        .collect()
}

/// Builder for loading and extracting documents.
///
/// # Example
///
/// ```no_run
/// use papersect::{CleanupPreset, HeadingMismatch, Papersect};
///
/// let markdown = Papersect::new()
///     .with_heading_mismatch(HeadingMismatch::AsBody)
///     .uniform_trim()
///     .with_cleanup(CleanupPreset::Standard)
///     .parse("paper.json")?
///     .to_markdown()?;
/// # Ok::<(), papersect::Error>(())
/// ```
pub struct Papersect {
    extract_options: ExtractOptions,
    render_options: RenderOptions,
    registry: SourceRegistry,
}

impl Papersect {
    /// Create a new builder with the default sources.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            render_options: RenderOptions::default(),
            registry: SourceRegistry::with_defaults(),
        }
    }

    /// Replace the extraction options.
    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Use a known title instead of detecting one.
    pub fn with_known_title(mut self, title: impl Into<String>) -> Self {
        self.extract_options = self.extract_options.with_known_title(title);
        self
    }

    /// Set the heading mismatch policy.
    pub fn with_heading_mismatch(mut self, policy: HeadingMismatch) -> Self {
        self.extract_options = self.extract_options.with_heading_mismatch(policy);
        self
    }

    /// Trim every section body.
    pub fn uniform_trim(mut self) -> Self {
        self.extract_options = self.extract_options.uniform_trim();
        self
    }

    /// Set cleanup preset for rendered output.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Replace the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Register an additional document source.
    pub fn with_source(mut self, source: std::sync::Arc<dyn DocumentSource>) -> Self {
        self.registry.register(source);
        self
    }

    /// Load a file and extract from it.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<PapersectResult> {
        let doc = self.registry.load(path.as_ref())?;
        self.analyse(doc)
    }

    /// Load JSON span dump bytes and extract from them.
    pub fn parse_bytes(self, data: &[u8]) -> Result<PapersectResult> {
        let doc = JsonSource::new().load_bytes(data)?;
        self.analyse(doc)
    }

    /// Extract from an already loaded document.
    pub fn analyse(self, document: Document) -> Result<PapersectResult> {
        let extraction = extract_with_options(&document, &self.extract_options)?;
        Ok(PapersectResult {
            document,
            extraction,
            render_options: self.render_options,
        })
    }
}

impl Default for Papersect {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of loading and analysing a document.
pub struct PapersectResult {
    /// The loaded span stream
    pub document: Document,
    /// The extracted structure
    pub extraction: Extraction,
    /// Render options to use
    render_options: RenderOptions,
}

impl PapersectResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.extraction, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.extraction, format)
    }

    /// Convert to digest text.
    pub fn to_digest(&self) -> Result<String> {
        render::to_digest(&self.extraction, &self.render_options)
    }

    /// Numbered chapter lines of the document.
    pub fn chapter_names(&self) -> Vec<String> {
        chapter_names(&self.document)
    }

    /// Get the extraction.
    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str, size: f64) -> Block {
        Block::text(vec![Line::new(vec![Span::new(text, size)])])
    }

    fn paper() -> Document {
        Document::from_pages(vec![
            Page::with_blocks(vec![
                block("arXiv:2401.00001v1 [cs.CL]", 19.0),
                block("Structure From", 20.0),
                block("Fonts Alone", 20.0),
                block("Jane Doe", 11.0),
                block("Abstract", 12.0),
                block("We recover structure.", 10.0),
                block("We use font sizes.", 10.0),
            ]),
            Page::with_blocks(vec![
                block("Introduction", 12.0),
                block("Papers have sections.", 10.0),
                block("Headings are larger.", 10.0),
                block("References", 12.0),
                block("[1] Someone. A paper.", 10.0),
            ]),
        ])
    }

    #[test]
    fn test_extract_paper() {
        let extraction = extract(&paper()).unwrap();
        assert_eq!(extraction.title, "Structure From Fonts Alone");
        assert_eq!(extraction.title_page, 0);
        assert_eq!(extraction.section_names(), vec!["Abstract", "Introduction"]);
        assert_eq!(
            extraction.section("Abstract"),
            Some("We recover structure. We use font sizes.")
        );
        assert_eq!(
            extraction.section("Introduction"),
            Some("Papers have sections. Headings are larger.")
        );
    }

    #[test]
    fn test_extract_empty_document() {
        let result = extract(&Document::new());
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_extract_known_title() {
        let options = ExtractOptions::new().with_known_title("Given Title");
        let extraction = extract_with_options(&paper(), &options).unwrap();
        assert_eq!(extraction.title, "Given Title");
        assert_eq!(extraction.title_page, 0);
        assert_eq!(extraction.sections.len(), 2);
    }

    #[test]
    fn test_extract_rejects_invalid_options() {
        let options = ExtractOptions::new().with_stop_marker("");
        let result = extract_with_options(&paper(), &options);
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_extract_batch_keeps_order() {
        let docs = vec![paper(), Document::new(), paper()];
        let results = extract_batch(&docs, &ExtractOptions::default());
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::EmptyDocument)));
        assert_eq!(
            results[2].as_ref().unwrap().title,
            "Structure From Fonts Alone"
        );
    }

    #[test]
    fn test_builder_analyse() {
        let result = Papersect::new()
            .with_known_title("Known")
            .with_cleanup(CleanupPreset::Minimal)
            .analyse(paper())
            .unwrap();
        assert_eq!(result.extraction().title, "Known");
        let digest = result.to_digest().unwrap();
        assert!(digest.ends_with("title:Known:\n"));
        assert!(result.to_markdown().unwrap().starts_with("# Known"));
    }

    #[test]
    fn test_builder_parse_invalid_bytes() {
        let result = Papersect::new().parse_bytes(b"not a span dump");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_extract_bytes() {
        let json = br#"[{"blocks": [
            {"lines": [{"spans": [{"text": "Abstract", "size": 10}]}]},
            {"lines": [{"spans": [{"text": "Short body.", "size": 10}]}]}
        ]}]"#;
        let extraction = extract_bytes(json).unwrap();
        assert_eq!(extraction.section("Abstract"), Some(" Short body."));
    }
}
