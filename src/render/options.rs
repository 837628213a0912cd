//! Rendering options and configuration.

use super::{CleanupOptions, CleanupPreset};

/// Options for rendering an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the title as a top-level heading (Markdown)
    pub include_title: bool,

    /// Heading level used for sections in Markdown (1-6)
    pub section_heading_level: u8,

    /// Include sections whose body is empty
    pub include_empty_sections: bool,

    /// Text cleanup applied to section bodies and the title
    pub cleanup: Option<CleanupOptions>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the title heading.
    pub fn with_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }

    /// Set the section heading level.
    pub fn with_section_level(mut self, level: u8) -> Self {
        self.section_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable sections with empty bodies.
    pub fn with_empty_sections(mut self, include: bool) -> Self {
        self.include_empty_sections = include;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_title: true,
            section_heading_level: 2,
            include_empty_sections: true,
            cleanup: None,
        }
    }
}
