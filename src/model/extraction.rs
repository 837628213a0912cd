//! Result types produced by structure extraction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which the title is merged into the section lookup.
pub const TITLE_KEY: &str = "title";

/// Title recovered from the largest fonts of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleResult {
    /// Space-joined qualifying spans, newlines replaced by spaces
    pub title: String,

    /// Index (0-based) of the page holding the last span that contributed
    pub title_page: usize,
}

impl TitleResult {
    /// Create a new title result.
    pub fn new(title: impl Into<String>, title_page: usize) -> Self {
        Self {
            title: title.into(),
            title_page,
        }
    }

    /// Check if no title was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// Ordered mapping from heading name to body text.
///
/// Keeps the order of first occurrence next to the lookup map. A heading
/// name that occurs twice keeps its first position and restarts its body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTable {
    order: Vec<String>,
    texts: HashMap<String, String>,
}

impl SectionTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section with an empty body.
    ///
    /// Returns `true` if the name was not present before.
    pub fn open(&mut self, name: &str) -> bool {
        let is_new = self.texts.insert(name.to_string(), String::new()).is_none();
        if is_new {
            self.order.push(name.to_string());
        }
        is_new
    }

    /// Append text to a section body. Unknown names are ignored.
    pub fn append(&mut self, name: &str, text: &str) {
        if let Some(body) = self.texts.get_mut(name) {
            body.push_str(text);
        }
    }

    /// Trim leading and trailing whitespace from a section body.
    pub fn trim(&mut self, name: &str) {
        if let Some(body) = self.texts.get_mut(name) {
            let trimmed = body.trim();
            if trimmed.len() != body.len() {
                *body = trimmed.to_string();
            }
        }
    }

    /// Body of a section.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(String::as_str)
    }

    /// Section names in order of first occurrence.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Lookup from section name to body.
    pub fn texts(&self) -> &HashMap<String, String> {
        &self.texts
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the table has no sections.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over `(name, body)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.get(name).unwrap_or_default()))
    }

    /// Convert into an ordered list of sections.
    pub fn into_sections(mut self) -> Vec<Section> {
        self.order
            .into_iter()
            .map(|name| {
                let body = self.texts.remove(&name).unwrap_or_default();
                Section { name, body }
            })
            .collect()
    }
}

/// A named section and its body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text
    pub name: String,

    /// Body text accumulated under the heading
    pub body: String,
}

impl Section {
    /// Create a new section.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Structured result of analysing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Recovered title (may be empty)
    pub title: String,

    /// Page index of the last title span
    pub title_page: usize,

    /// Sections in order of first occurrence
    pub sections: Vec<Section>,
}

impl Extraction {
    /// Assemble an extraction from its parts.
    pub fn new(title: TitleResult, sections: SectionTable) -> Self {
        Self {
            title: title.title,
            title_page: title.title_page,
            sections: sections.into_sections(),
        }
    }

    /// Section names in order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Body of a section by name.
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.body.as_str())
    }

    /// Section lookup with the title merged in under [`TITLE_KEY`].
    pub fn section_texts(&self) -> HashMap<String, String> {
        let mut texts: HashMap<String, String> = self
            .sections
            .iter()
            .map(|s| (s.name.clone(), s.body.clone()))
            .collect();
        texts.insert(TITLE_KEY.to_string(), self.title.clone());
        texts
    }

    /// Ordered `(name, body)` entries of [`Self::section_texts`].
    ///
    /// Sections come first; the title entry replaces a section literally
    /// named [`TITLE_KEY`] in place, otherwise it is appended.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .sections
            .iter()
            .map(|s| (s.name.as_str(), s.body.as_str()))
            .collect();
        match entries.iter_mut().find(|(name, _)| *name == TITLE_KEY) {
            Some(entry) => entry.1 = self.title.as_str(),
            None => entries.push((TITLE_KEY, self.title.as_str())),
        }
        entries
    }

    /// Check if nothing useful was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_table_keeps_first_position() {
        let mut table = SectionTable::new();
        assert!(table.open("Intro"));
        table.append("Intro", " old text");
        assert!(table.open("Method"));
        assert!(!table.open("Intro"));
        table.append("Intro", " new text");

        assert_eq!(table.names(), ["Intro", "Method"]);
        assert_eq!(table.get("Intro"), Some(" new text"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_section_table_trim() {
        let mut table = SectionTable::new();
        table.open("Abstract");
        table.append("Abstract", " We study X. ");
        table.trim("Abstract");
        assert_eq!(table.get("Abstract"), Some("We study X."));
        table.append("Missing", "ignored");
        assert!(table.get("Missing").is_none());
    }

    #[test]
    fn test_extraction_section_texts_include_title() {
        let mut table = SectionTable::new();
        table.open("Abstract");
        table.append("Abstract", "Body");
        let extraction = Extraction::new(TitleResult::new("A Paper", 0), table);

        let texts = extraction.section_texts();
        assert_eq!(texts.get("title").map(String::as_str), Some("A Paper"));
        assert_eq!(texts.get("Abstract").map(String::as_str), Some("Body"));
        assert_eq!(extraction.section_names(), vec!["Abstract"]);
        assert_eq!(extraction.entries(), vec![("Abstract", "Body"), ("title", "A Paper")]);
    }

    #[test]
    fn test_entries_replace_title_section_in_place() {
        let extraction = Extraction {
            title: "Real".to_string(),
            title_page: 0,
            sections: vec![Section::new("title", "fake"), Section::new("Intro", "x")],
        };
        assert_eq!(extraction.entries(), vec![("title", "Real"), ("Intro", "x")]);
    }
}
