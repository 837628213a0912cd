//! Markdown rendering of extractions.

use crate::error::Result;
use crate::model::Extraction;

use super::{CleanupPipeline, RenderOptions};

/// Convert an extraction to Markdown.
pub fn to_markdown(extraction: &Extraction, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(extraction)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    cleanup: Option<CleanupPipeline>,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        let cleanup = options.cleanup.clone().map(CleanupPipeline::new);
        Self { options, cleanup }
    }

    /// Render an extraction to Markdown.
    pub fn render(&self, extraction: &Extraction) -> Result<String> {
        let mut output = String::new();

        if self.options.include_title && !extraction.title.is_empty() {
            output.push_str("# ");
            output.push_str(&self.clean(&extraction.title));
            output.push_str("\n\n");
        }

        let marker = "#".repeat(self.options.section_heading_level.clamp(1, 6) as usize);
        for section in &extraction.sections {
            let body = self.clean(&section.body);
            if body.trim().is_empty() && !self.options.include_empty_sections {
                continue;
            }

            output.push_str(&format!("{} {}\n\n", marker, section.name.trim()));
            if !body.trim().is_empty() {
                output.push_str(body.trim());
                output.push_str("\n\n");
            }
        }

        Ok(output.trim_end().to_string())
    }

    fn clean(&self, text: &str) -> String {
        match &self.cleanup {
            Some(pipeline) => pipeline.process(text),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use crate::render::CleanupPreset;

    fn sample() -> Extraction {
        Extraction {
            title: "A Study of X".to_string(),
            title_page: 0,
            sections: vec![
                Section::new("Abstract", "We study X."),
                Section::new("Empty", ""),
                Section::new("METHOD", " We   do Y. "),
            ],
        }
    }

    #[test]
    fn test_to_markdown() {
        let md = to_markdown(&sample(), &RenderOptions::default()).unwrap();
        assert_eq!(
            md,
            "# A Study of X\n\n## Abstract\n\nWe study X.\n\n## Empty\n\n## METHOD\n\nWe   do Y."
        );
    }

    #[test]
    fn test_to_markdown_options() {
        let options = RenderOptions::new()
            .with_title(false)
            .with_section_level(3)
            .with_empty_sections(false)
            .with_cleanup_preset(CleanupPreset::Minimal);
        let md = to_markdown(&sample(), &options).unwrap();
        assert_eq!(md, "### Abstract\n\nWe study X.\n\n### METHOD\n\nWe do Y.");
    }

    #[test]
    fn test_to_markdown_empty_extraction() {
        let md = to_markdown(&Extraction::default(), &RenderOptions::default()).unwrap();
        assert!(md.is_empty());
    }
}
