//! Records-to-markdown serializer.
//!
//! The inverse of the parser's flattening: records are grouped by heading path
//! and runs of records under the same path collapse back to a single heading
//! line, followed by each record's content. Output is a pure function of the
//! input list — callers may feed records in any order.

use crate::section::{MAX_DEPTH, Section};

#[must_use]
/// Rebuilds a markdown document from section records at the full schema depth.
pub fn serialize(records: &[Section]) -> String {
    serialize_with_depth(records, MAX_DEPTH)
}

#[must_use]
/// Rebuilds a markdown document from section records, emitting headings down
/// to `depth` levels.
///
/// Records are stable-sorted by their heading path (empty titles sort before
/// any non-empty title, ties broken by deeper levels), then only headings that
/// change between consecutive records are emitted. Heading fields beyond
/// `depth` are ignored. `depth` is clamped to `1..=MAX_DEPTH`.
pub fn serialize_with_depth(records: &[Section], depth: usize) -> String {
    let depth = depth.clamp(1, MAX_DEPTH);

    let mut sorted: Vec<&Section> = records.iter().collect();
    sorted.sort_by(|a, b| a.sort_key(depth).cmp(&b.sort_key(depth)));

    let mut emitted: [String; MAX_DEPTH] = std::array::from_fn(|_| String::new());
    let mut lines: Vec<String> = Vec::new();

    for record in sorted {
        for level in 1..=depth {
            let title = record.heading(level);
            if title.is_empty() || emitted[level - 1] == title {
                continue;
            }
            // A change at this level invalidates every deeper slot, so an
            // unchanged deeper title still re-emits under its new ancestor.
            for slot in emitted.iter_mut().skip(level - 1) {
                slot.clear();
            }
            lines.push(format!("{} {title}", "#".repeat(level)));
            emitted[level - 1] = title.to_string();
        }

        if !record.content.is_empty() {
            lines.push(record.content.clone());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "tests/serializer.rs"]
mod tests;
