//! Markdown-to-records parser.
//!
//! Scans a document line by line, tracking the current heading at each level,
//! and emits one [`Section`] per content block. A block closes exactly when a
//! new heading line is seen or the document ends, so one heading is spread
//! across as many records as it has content blocks beneath it.

use crate::block;
use crate::section::{MAX_DEPTH, Section};
use regex::Regex;

#[must_use]
/// Splits a markdown document into section records at the full schema depth.
pub fn parse(text: &str) -> Vec<Section> {
    parse_with_depth(text, MAX_DEPTH)
}

#[must_use]
/// Splits a markdown document into section records, recognizing headings down
/// to `depth` levels.
///
/// `depth` is clamped to `1..=MAX_DEPTH`. Heading-like lines deeper than
/// `depth` pass through as content, as does any line that fails the heading
/// pattern, so the parser accepts arbitrary text. Documents with no content
/// lines produce no records.
pub fn parse_with_depth(text: &str, depth: usize) -> Vec<Section> {
    let depth = depth.clamp(1, MAX_DEPTH);
    let pattern = heading_pattern(depth);

    let mut headings: [String; MAX_DEPTH] = std::array::from_fn(|_| String::new());
    let mut buffer: Vec<&str> = Vec::new();
    let mut records = Vec::new();

    for line in text.lines() {
        if let Some(caps) = pattern.captures(line) {
            if !buffer.is_empty() {
                records.push(flush(&headings, &buffer));
                buffer.clear();
            }
            let level = caps[1].len();
            headings[level - 1] = caps[2].trim().to_string();
            // Entering a heading invalidates everything nested below it.
            for slot in headings.iter_mut().skip(level) {
                slot.clear();
            }
        } else {
            buffer.push(line);
        }
    }

    if !buffer.is_empty() {
        records.push(flush(&headings, &buffer));
    }

    records
}

/// Closes a content block: join, trim, snapshot the current heading path.
fn flush(headings: &[String; MAX_DEPTH], buffer: &[&str]) -> Section {
    let content = buffer.join("\n");
    Section {
        h1: headings[0].clone(),
        h2: headings[1].clone(),
        h3: headings[2].clone(),
        h4: headings[3].clone(),
        content: block::trim(&content).to_string(),
    }
}

/// Builds the recognizer for ATX heading lines of levels `1..=depth`.
fn heading_pattern(depth: usize) -> Regex {
    Regex::new(&format!(r"^(#{{1,{depth}}})\s+(.*)")).expect("heading pattern is valid")
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
