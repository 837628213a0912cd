//! Digest rendering: the flat `name:body:` text handed to a summarizer.

use crate::error::Result;
use crate::model::Extraction;

use super::{CleanupPipeline, RenderOptions};

/// Convert an extraction to digest text.
///
/// One line per entry of [`Extraction::entries`], formatted as
/// `"{name}:{body}:\n"`. The title entry is always present.
pub fn to_digest(extraction: &Extraction, options: &RenderOptions) -> Result<String> {
    let pipeline = options.cleanup.clone().map(CleanupPipeline::new);

    let mut output = String::new();
    for (name, body) in extraction.entries() {
        let body = match &pipeline {
            Some(pipeline) => pipeline.process(body),
            None => body.to_string(),
        };
        output.push_str(&format!("{}:{}:\n", name, body));
    }
    Ok(output)
}
