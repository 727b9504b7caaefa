use super::{parse, parse_with_depth};
use crate::section::Section;

fn record(h1: &str, h2: &str, h3: &str, h4: &str, content: &str) -> Section {
    Section {
        h1: h1.to_string(),
        h2: h2.to_string(),
        h3: h3.to_string(),
        h4: h4.to_string(),
        content: content.to_string(),
    }
}

#[test]
fn test_one_record_per_content_block() {
    let records = parse("# A\ntext1\n## B\ntext2\n# C\ntext3");

    assert_eq!(
        records,
        vec![
            record("A", "", "", "", "text1"),
            record("A", "B", "", "", "text2"),
            record("C", "", "", "", "text3"),
        ]
    );
}

#[test]
fn test_shallower_heading_resets_deeper_levels() {
    let records = parse("# A\n## B\n### C\nx\n## D\ny");

    assert_eq!(records[0], record("A", "B", "C", "", "x"));
    assert_eq!(records[1], record("A", "D", "", "", "y"));
}

#[test]
fn test_content_before_any_heading_has_empty_path() {
    let records = parse("intro\n# A\nx");

    assert_eq!(records[0], record("", "", "", "", "intro"));
    assert_eq!(records[1], record("A", "", "", "", "x"));
}

#[test]
fn test_headings_without_content_produce_no_records() {
    assert!(parse("# A\n## B\n#### D").is_empty());
    assert!(parse("").is_empty());
}

#[test]
fn test_level_five_heading_is_content() {
    let records = parse("# A\n##### deep\ntext");

    assert_eq!(records, vec![record("A", "", "", "", "##### deep\ntext")]);
}

#[test]
fn test_depth_limit_demotes_deeper_headings_to_content() {
    let records = parse_with_depth("# A\n### C\nx", 2);

    assert_eq!(records, vec![record("A", "", "", "", "### C\nx")]);
}

#[test]
fn test_heading_titles_are_trimmed() {
    let records = parse("#   Padded title  \ncontent");

    assert_eq!(records[0].h1, "Padded title");
}

#[test]
fn test_hash_without_space_is_content() {
    let records = parse("#tag\nx");

    assert_eq!(records, vec![record("", "", "", "", "#tag\nx")]);
}

#[test]
fn test_blank_boundary_lines_collapse_to_delimiters() {
    let records = parse("# A\n\nhello\n\n## B\nx");

    assert_eq!(records[0].content, "\nhello\n");
}

#[test]
fn test_record_order_follows_document_order() {
    let records = parse("# Z\nz\n# A\na");

    assert_eq!(records[0].h1, "Z");
    assert_eq!(records[1].h1, "A");
}
