//! sectile: flatten markdown sections into records and back.
//!
//! A heading-structured document is disassembled into a flat list of
//! [`section::Section`] records — one per content block, each carrying the
//! heading path above it — which can be stored as JSON, reordered, filtered,
//! or rehomed into a note-taking vault, then reassembled into markdown.
//!
//! The parser spreads one heading across every record beneath it; the
//! serializer sorts records by heading path and collapses runs under the same
//! path back to a single heading line. Round trips are lossless up to
//! blank-line normalization at block boundaries.
//!
//! ```
//! use sectile::{parser, serializer};
//!
//! let records = parser::parse("# Notes\nfirst\n## Ideas\nsecond");
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].h2, "Ideas");
//!
//! let doc = serializer::serialize(&records);
//! assert_eq!(doc, "# Notes\nfirst\n## Ideas\nsecond");
//! ```

pub mod block;
pub mod config;
pub mod parser;
pub mod section;
pub mod serializer;
