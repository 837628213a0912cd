//! Integration tests for rendering extractions.

use papersect::render::{to_digest, to_json, to_markdown, CleanupOptions, CleanupPreset};
use papersect::{extract, Block, Document, Extraction, JsonFormat, Line, Page, RenderOptions, Span};

fn block(text: &str, size: f64) -> Block {
    Block::text(vec![Line::new(vec![Span::new(text, size)])])
}

fn extraction() -> Extraction {
    let doc = Document::from_pages(vec![Page::with_blocks(vec![
        block("Rendering Recovered", 20.0),
        block("Structure", 16.0),
        block("Abstract", 10.0),
        block("We render things.", 10.0),
        block("Method", 12.0),
        block("Hyphen-  ated words and   gaps.", 10.0),
        block("Empty", 12.0),
    ])]);
    extract(&doc).unwrap()
}

#[test]
fn test_markdown_output() {
    let markdown = to_markdown(&extraction(), &RenderOptions::default()).unwrap();
    assert_eq!(
        markdown,
        "# Rendering Recovered Structure\n\n\
         ## Abstract\n\n\
         We render things.\n\n\
         ## Method\n\n\
         Hyphen-  ated words and   gaps.\n\n\
         ## Empty"
    );
}

#[test]
fn test_markdown_with_cleanup() {
    let options = RenderOptions::default()
        .with_cleanup_preset(CleanupPreset::Standard)
        .with_empty_sections(false)
        .with_section_level(3);
    let markdown = to_markdown(&extraction(), &options).unwrap();

    assert!(markdown.contains("### Method\n\nHyphenated words and gaps."));
    assert!(!markdown.contains("Empty"));
}

#[test]
fn test_markdown_without_title() {
    let options = RenderOptions::default().with_title(false);
    let markdown = to_markdown(&extraction(), &options).unwrap();
    assert!(markdown.starts_with("## Abstract"));
}

#[test]
fn test_digest_output() {
    let options = RenderOptions::default().with_cleanup(CleanupOptions::minimal());
    let digest = to_digest(&extraction(), &options).unwrap();

    let lines: Vec<&str> = digest.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Abstract:We render things.:");
    assert_eq!(lines[2], "Empty::");
    assert_eq!(lines[3], "title:Rendering Recovered Structure:");
    assert!(digest.ends_with(":\n"));
}

#[test]
fn test_json_output() {
    let extraction = extraction();
    let compact = to_json(&extraction, JsonFormat::Compact).unwrap();
    let pretty = to_json(&extraction, JsonFormat::Pretty).unwrap();

    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));

    let parsed: Extraction = serde_json::from_str(&compact).unwrap();
    assert_eq!(parsed, extraction);

    let value: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(value["title"], "Rendering Recovered Structure");
    assert_eq!(value["sections"][1]["name"], "Method");
}
