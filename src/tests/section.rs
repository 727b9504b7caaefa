use super::{MAX_DEPTH, Section};

#[test]
fn test_heading_accessor_by_level() {
    let record = Section {
        h1: "A".to_string(),
        h2: "B".to_string(),
        ..Section::default()
    };

    assert_eq!(record.heading(1), "A");
    assert_eq!(record.heading(2), "B");
    assert_eq!(record.heading(3), "");
    assert_eq!(record.heading(4), "");
    assert_eq!(record.heading(0), "");
    assert_eq!(record.heading(5), "", "levels beyond the schema are empty");
}

#[test]
fn test_sort_key_truncates_to_depth() {
    let record = Section {
        h1: "A".to_string(),
        h2: "B".to_string(),
        h3: "C".to_string(),
        ..Section::default()
    };

    assert_eq!(record.sort_key(MAX_DEPTH), vec!["A", "B", "C", ""]);
    assert_eq!(record.sort_key(2), vec!["A", "B"]);
}

#[test]
fn test_serializes_with_fixed_key_order() {
    let record = Section {
        h1: "A".to_string(),
        content: "x".to_string(),
        ..Section::default()
    };

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"h1":"A","h2":"","h3":"","h4":"","content":"x"}"#);
}

#[test]
fn test_sparse_objects_deserialize_with_defaults() {
    let record: Section = serde_json::from_str(r#"{"h1":"A","content":"x"}"#).unwrap();

    assert_eq!(record.h1, "A");
    assert_eq!(record.h2, "");
    assert_eq!(record.h4, "");
    assert_eq!(record.content, "x");
}
