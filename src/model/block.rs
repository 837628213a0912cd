//! Block, line and span types.

use serde::{Deserialize, Serialize};

/// A block as reported by the renderer: a visual paragraph of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Renderer block type (0 = text, anything else = non-text)
    #[serde(rename = "type", default)]
    pub kind: BlockKind,

    /// Lines in the block; absent for image blocks
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a text block.
    pub fn text(lines: Vec<Line>) -> Self {
        Self {
            kind: BlockKind::Text,
            lines,
        }
    }

    /// Create an image block. Image blocks carry no lines.
    pub fn image() -> Self {
        Self {
            kind: BlockKind::Image,
            lines: Vec::new(),
        }
    }

    /// Check if this is a text block.
    pub fn is_text(&self) -> bool {
        self.kind == BlockKind::Text
    }

    /// First span of the first line, if any.
    ///
    /// This is the only span of a block that the title scan looks at.
    pub fn first_span(&self) -> Option<&Span> {
        self.lines.first().and_then(|line| line.spans.first())
    }

    /// Iterate over the spans of all lines.
    pub fn spans(&self) -> impl Iterator<Item = &Span> + '_ {
        self.lines.iter().flat_map(|line| line.spans.iter())
    }

    /// Raw text content: each line's spans concatenated, lines joined by newlines.
    pub fn raw_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renderer block type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum BlockKind {
    /// Text block (renderer type 0)
    #[default]
    Text,
    /// Image or other non-text block
    Image,
}

impl From<i64> for BlockKind {
    fn from(value: i64) -> Self {
        match value {
            0 => BlockKind::Text,
            _ => BlockKind::Image,
        }
    }
}

impl From<BlockKind> for i64 {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Text => 0,
            BlockKind::Image => 1,
        }
    }
}

/// A line of spans on the same baseline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Spans in reading order
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// The smallest unit of rendered text carrying a font size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    #[serde(default)]
    pub text: String,

    /// Font size in points
    #[serde(rename = "size", alias = "font_size", default)]
    pub font_size: f64,

    /// Font name (e.g., "NimbusRomNo9L-Medi")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl Span {
    /// Create a new span.
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_size,
            font: None,
        }
    }

    /// Set the font name.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}
