//! End-to-end grammar and round-trip conformance tests.
//!
//! Exercises the whole pipeline — lexer, parser, value tree, serializer —
//! through the public API only.

use jsontree::{compact, indented, parse_str, JsonError, JsonValue};

// ============================================================================
// Round-trip
// ============================================================================

const DOCUMENTS: &[&str] = &[
    "{}",
    "[]",
    r#"{"a": 1}"#,
    r#"[1, 2.5, -3, 1e3, 2E-2]"#,
    r#"{"s": "text", "b": true, "f": false, "n": null}"#,
    r#"{"d": {"arr": [1, 2, 3, "x"]}}"#,
    r#"[[[]]]"#,
    r#"[{"a": []}, {"b": {}}]"#,
    r#"{"escaped": "line\nbreak and \"quote\""}"#,
];

#[test]
fn roundtrip_compact_is_deep_equal() {
    for doc in DOCUMENTS {
        let tree = parse_str(doc).unwrap();
        let reparsed = parse_str(&compact(&tree)).unwrap();
        assert_eq!(tree, reparsed, "compact round-trip failed for {:?}", doc);
    }
}

#[test]
fn roundtrip_indented_is_deep_equal() {
    for doc in DOCUMENTS {
        let tree = parse_str(doc).unwrap();
        for width in [0, 2, 4, 8] {
            let reparsed = parse_str(&indented(&tree, width)).unwrap();
            assert_eq!(
                tree, reparsed,
                "indented({}) round-trip failed for {:?}",
                width, doc
            );
        }
    }
}

#[test]
fn roundtrip_indentation_is_idempotent() {
    for doc in DOCUMENTS {
        let first = indented(&parse_str(doc).unwrap(), 4);
        let second = indented(&parse_str(&first).unwrap(), 4);
        assert_eq!(first, second, "indentation not idempotent for {:?}", doc);
    }
}

// ============================================================================
// Empty composites
// ============================================================================

#[test]
fn empty_object_both_modes() {
    let tree = parse_str("{}").unwrap();
    assert!(tree.is_object());
    assert_eq!(tree.as_object().unwrap().len(), 0);
    assert_eq!(compact(&tree), "{}");
    assert_eq!(indented(&tree, 4), "{}");
}

#[test]
fn empty_array_both_modes() {
    let tree = parse_str("[]").unwrap();
    assert!(tree.is_array());
    assert_eq!(tree.as_array().unwrap().len(), 0);
    assert_eq!(compact(&tree), "[]");
    assert_eq!(indented(&tree, 4), "[]");
}

// ============================================================================
// Duplicate keys
// ============================================================================

#[test]
fn duplicate_keys_last_write_wins() {
    let tree = parse_str(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(tree["a"].as_f64(), Some(2.0));
    assert_eq!(tree.as_object().unwrap().len(), 1);
}

// ============================================================================
// Case-insensitive literals
// ============================================================================

#[test]
fn keyword_case_variants_all_parse() {
    for doc in [r#"[TRUE]"#, r#"[True]"#, r#"[true]"#, r#"[tRuE]"#] {
        let tree = parse_str(doc).unwrap();
        assert_eq!(tree[0].as_bool(), Some(true), "failed for {:?}", doc);
    }
    assert_eq!(parse_str("[FALSE]").unwrap()[0].as_bool(), Some(false));
    assert!(parse_str("[NULL]").unwrap()[0].is_null());
}

// ============================================================================
// Nested structures
// ============================================================================

#[test]
fn nested_path_extraction() {
    let tree = parse_str(r#"{"d":{"arr":[1,2,3,"x"]}}"#).unwrap();
    assert_eq!(tree["d"]["arr"][3].as_str(), Some("x"));

    let mut out = String::new();
    assert!(tree["d"]["arr"][3].extract(&mut out));
    assert_eq!(out, "x");
}

// ============================================================================
// Error cases
// ============================================================================

#[test]
fn missing_value_is_a_grammar_error() {
    assert!(matches!(
        parse_str(r#"{"a":}"#),
        Err(JsonError::UnexpectedToken)
    ));
}

#[test]
fn unterminated_string_is_a_lexer_error() {
    assert!(matches!(
        parse_str(r#"{"a": "unterminated"#),
        Err(JsonError::UnterminatedString { .. })
    ));
}

#[test]
fn bare_scalar_document_is_an_invalid_start() {
    assert!(matches!(
        parse_str("42"),
        Err(JsonError::InvalidDocumentStart)
    ));
}

#[test]
fn lexer_context_window_is_bounded() {
    let long = format!(r#"{{"k": {}@}}"#, " ".repeat(200));
    match parse_str(&long) {
        Err(JsonError::UnexpectedCharacter { context }) => {
            assert!(context.len() <= 12, "context too wide: {:?}", context);
            assert!(context.contains('@'));
        }
        other => panic!("expected UnexpectedCharacter, got {:?}", other),
    }
}

// ============================================================================
// Array early-exit vs object early-close
// ============================================================================

// One switch case closes an array both when it is empty and right after a
// trailing `value ,`; these tests pin both situations down separately.

#[test]
fn array_close_at_value_position_empty() {
    let tree = parse_str("[]").unwrap();
    assert_eq!(tree.as_array().unwrap().len(), 0);
}

#[test]
fn array_close_at_value_position_after_comma() {
    let tree = parse_str("[1, 2,]").unwrap();
    assert_eq!(tree.as_array().unwrap().len(), 2);
}

#[test]
fn object_close_at_key_position_with_entries_is_an_error() {
    assert!(matches!(
        parse_str(r#"{"a": 1,}"#),
        Err(JsonError::UnexpectedToken)
    ));
}

// ============================================================================
// Typed extraction
// ============================================================================

#[test]
fn throwing_accessor_reports_type_mismatch() {
    let mut tree = parse_str(r#"{"s": "text"}"#).unwrap();
    let node = tree.get_mut("s").unwrap();
    assert!(matches!(
        node.value_as::<bool>(),
        Err(JsonError::TypeMismatch {
            expected: "boolean",
            actual: "string",
        })
    ));
}

#[test]
fn non_throwing_accessor_leaves_output_unmodified() {
    let tree = parse_str(r#"{"s": "text"}"#).unwrap();
    let mut out = true;
    assert!(!tree["s"].extract(&mut out));
    assert!(out, "output must be untouched on mismatch");
}

#[test]
fn live_reference_mutates_the_tree() {
    let mut tree = parse_str(r#"{"n": 1}"#).unwrap();
    *tree.get_mut("n").unwrap().value_as::<f64>().unwrap() = 7.0;
    assert_eq!(compact(&tree), r#"{ "n": 7 }"#);
}

// ============================================================================
// Programmatic construction round-trip
// ============================================================================

#[test]
fn built_tree_serializes_and_reparses() {
    let mut root = JsonValue::new_object();
    root.insert("title", "demo");
    root.insert("count", 3);
    root.insert("flag", false);
    root.insert("nothing", ());

    let mut tags = JsonValue::new_array();
    tags.append("a").append("b").append(1.5);
    root.insert("tags", tags);

    let reparsed = parse_str(&indented(&root, 2)).unwrap();
    assert_eq!(root, reparsed);
    assert_eq!(reparsed["tags"][2].as_f64(), Some(1.5));
}

#[test]
fn mutation_survives_round_trip() {
    let mut tree = parse_str(r#"{"keep": 1, "drop": 2, "arr": [10, 20, 30]}"#).unwrap();
    assert!(tree.remove("drop"));
    assert!(tree.get_mut("arr").unwrap().remove_index(1));
    tree.get_or_insert("fresh").unwrap().append(true);

    let reparsed = parse_str(&compact(&tree)).unwrap();
    assert!(reparsed.get("drop").is_none());
    assert_eq!(reparsed["arr"].as_array().unwrap().len(), 2);
    assert_eq!(reparsed["fresh"].as_bool(), Some(true));
}
