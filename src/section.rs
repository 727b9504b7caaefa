//! Section records: the flat interchange unit between parser and serializer.
//!
//! A section records the heading path it falls under (one slot per level, up to
//! [`MAX_DEPTH`]) plus the content block that followed the most recent heading
//! change. An empty slot means no heading was set at or below the nearest
//! enclosing level when the record was captured, so a record's non-empty slots
//! always form a prefix when it comes from a well-nested document.

use serde::{Deserialize, Serialize};

/// Deepest heading level carried in the record schema.
pub const MAX_DEPTH: usize = 4;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Flat record of one content block and the heading path above it.
///
/// Field order matters: records serialize as JSON objects with keys in
/// declaration order, and every field defaults to empty so sparse objects
/// (`{"h1": "A", "content": "x"}`) deserialize cleanly.
pub struct Section {
    /// Title of the enclosing level-1 heading, or empty.
    #[serde(default)]
    pub h1: String,
    /// Title of the enclosing level-2 heading, or empty.
    #[serde(default)]
    pub h2: String,
    /// Title of the enclosing level-3 heading, or empty.
    #[serde(default)]
    pub h3: String,
    /// Title of the enclosing level-4 heading, or empty.
    #[serde(default)]
    pub h4: String,
    /// Non-heading text captured under this heading path, boundary-trimmed.
    #[serde(default)]
    pub content: String,
}

impl Section {
    #[must_use]
    /// Returns the heading title at `level` (1-based).
    ///
    /// Levels outside the schema return the empty string, so callers can probe
    /// any depth without bounds checks.
    pub fn heading(&self, level: usize) -> &str {
        match level {
            1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            _ => "",
        }
    }

    #[must_use]
    /// Builds the hierarchical sort key for this record, truncated to `depth`.
    ///
    /// Ordinary string ordering on the key groups records under the same
    /// heading path contiguously, with empty slots sorting before any title
    /// and ties broken by deeper levels.
    pub fn sort_key(&self, depth: usize) -> Vec<&str> {
        (1..=depth).map(|level| self.heading(level)).collect()
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
