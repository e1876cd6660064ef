//! Segments the backend's text buffer into per-slide title/body blocks.

use regex::Regex;
use std::sync::LazyLock;

/// `Slide <number>:` marker, any case.
static SLIDE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)slide\s+(\d+):").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideBlock {
    /// Number written in the marker. Informational only; sequencing follows scan order.
    pub label: String,
    pub title: String,
    pub body: String,
}

impl SlideBlock {
    fn from_block(label: &str, block: &str) -> Self {
        let block = block.trim();
        let mut lines = block.lines();
        let title = lines
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Slide {label}"));
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        Self { label: label.to_string(), title, body }
    }
}

/// Each block runs from just after its marker to the next marker or end of text.
/// Text before the first marker is discarded; no markers means no slides.
pub fn parse_slide_blocks(text: &str) -> Vec<SlideBlock> {
    let markers: Vec<(usize, usize, &str)> = SLIDE_MARKER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.get(1)?.as_str();
            Some((whole.start(), whole.end(), label))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(_, content_start, label))| {
            let content_end = markers.get(i + 1).map(|m| m.0).unwrap_or(text.len());
            SlideBlock::from_block(label, &text[content_start..content_end])
        })
        .collect()
}
