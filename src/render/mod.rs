//! Rendering module for turning extractions into output formats.

mod cleanup;
mod digest;
mod json;
mod markdown;
mod options;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use digest::to_digest;
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
