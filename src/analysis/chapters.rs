//! Numbered chapter lines such as "2. Related Work" or "IV. EXPERIMENTS".

use crate::model::Document;

/// Chapter numbers recognised as a line prefix.
pub const ROMAN_NUMERALS: [&str; 11] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IIX", "IX", "X",
];

/// Highest decimal chapter number recognised.
pub const MAX_DIGIT_CHAPTER: u32 = 10;

/// Collect lines that look like numbered chapter headings, in document order.
pub fn chapter_names(doc: &Document) -> Vec<String> {
    doc.pages
        .iter()
        .flat_map(|page| page.blocks.iter())
        .flat_map(|block| block.lines.iter())
        .map(|line| line.text())
        .filter(|text| is_chapter_line(text))
        .collect()
}

/// Check a single line of text.
pub fn is_chapter_line(line: &str) -> bool {
    if !line.contains('.') {
        return false;
    }
    let point_parts: Vec<&str> = line.split('.').collect();
    let space_parts = line.split(' ').count();

    (2..5).contains(&space_parts)
        && (2..5).contains(&point_parts.len())
        && is_chapter_number(point_parts[0])
}

fn is_chapter_number(prefix: &str) -> bool {
    ROMAN_NUMERALS.contains(&prefix)
        || (1..=MAX_DIGIT_CHAPTER).any(|n| n.to_string() == prefix)
}
