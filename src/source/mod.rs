//! Document sources: the boundary to whatever renders files into spans.
//!
//! The analysis never reads files itself. A [`DocumentSource`] turns a path
//! or a byte buffer into a [`Document`], and the [`SourceRegistry`] picks a
//! source by file extension. The built-in [`JsonSource`] reads span dumps;
//! a PDF renderer can be plugged in by implementing the trait.
//!
//! # Example
//!
//! ```no_run
//! use papersect::source::{JsonSource, SourceRegistry};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> papersect::Result<()> {
//!     let mut registry = SourceRegistry::new();
//!     registry.register(Arc::new(JsonSource::new()));
//!
//!     let doc = registry.load(Path::new("paper.json"))?;
//!     println!("{} pages", doc.page_count());
//!     Ok(())
//! }
//! ```

mod arxiv;
mod json;

pub use arxiv::ArxivId;
pub use json::JsonSource;

use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for document renderers.
///
/// Implement this trait to feed a new input format into the analysis.
pub trait DocumentSource: Send + Sync {
    /// Get the supported file extensions for this source.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["json"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Load a document from a file.
    fn load(&self, path: &Path) -> Result<Document>;

    /// Load a document from bytes.
    fn load_bytes(&self, bytes: &[u8]) -> Result<Document>;

    /// Check if this source supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping file extensions to document sources.
pub struct SourceRegistry {
    sources: HashMap<String, Arc<dyn DocumentSource>>,
    by_name: HashMap<String, Arc<dyn DocumentSource>>,
}

impl SourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in sources (JSON span dumps).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JsonSource::new()));
        registry
    }

    /// Register a source for all its supported extensions.
    pub fn register(&mut self, source: Arc<dyn DocumentSource>) {
        for ext in source.supported_extensions() {
            self.sources.insert(ext.to_lowercase(), source.clone());
        }
        self.by_name.insert(source.name().to_lowercase(), source);
    }

    /// Get a source by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentSource>> {
        self.sources.get(&ext.to_lowercase()).cloned()
    }

    /// Get a source by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentSource>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.sources.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.sources.keys().map(|s| s.as_str()).collect()
    }

    /// Load a file using the source registered for its extension.
    pub fn load(&self, path: &Path) -> Result<Document> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedSource(format!("{} has no extension", path.display())))?;

        let source = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedSource(format!("no source for extension: {}", ext)))?;

        log::debug!("Loading {} with the {} source", path.display(), source.name());
        source.load(path)
    }

    /// Load bytes using the extension to pick a source.
    pub fn load_bytes(&self, bytes: &[u8], ext: &str) -> Result<Document> {
        let source = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedSource(format!("no source for extension: {}", ext)))?;

        source.load_bytes(bytes)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = SourceRegistry::with_defaults();
        assert!(registry.supports("json"));
        assert!(registry.supports("JSON"));
        assert!(!registry.supports("pdf"));
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = SourceRegistry::with_defaults();
        let source = registry.get_by_name("json");
        assert!(source.is_some());
        assert_eq!(source.unwrap().name(), "json");
        assert!(registry.get_by_name("pdf").is_none());
    }

    #[test]
    fn test_registry_rejects_unknown_extension() {
        let registry = SourceRegistry::with_defaults();
        let result = registry.load(Path::new("paper.pdf"));
        assert!(matches!(result, Err(Error::UnsupportedSource(_))));

        let result = registry.load(Path::new("no_extension"));
        assert!(matches!(result, Err(Error::UnsupportedSource(_))));
    }
}
