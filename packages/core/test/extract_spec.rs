//! Exported Locals Extraction Tests

use css_typed::extract::extract_locals;

#[test]
fn should_return_empty_for_sources_without_the_locals_marker() {
    assert!(extract_locals("").is_empty());
    assert!(extract_locals("module.exports = {}").is_empty());
    assert!(extract_locals("var classes = {\"a\": \"b\"};").is_empty());
}

#[test]
fn should_extract_keys_in_source_order() {
    let source = r#"___CSS_LOADER_EXPORT___.locals = {"a":"h1","b":"h2"};"#;
    assert_eq!(extract_locals(source), vec!["a", "b"]);
}

#[test]
fn should_recognize_the_legacy_exports_marker() {
    let source = r#"exports.locals = {"root":"x"};"#;
    assert_eq!(extract_locals(source), vec!["root"]);
}

#[test]
fn should_use_only_the_first_marker_occurrence() {
    let source = concat!(
        "___CSS_LOADER_EXPORT___.locals = {\"real\":\"a\"};\n",
        "//# sourceMappingURL=data:application/json;base64,",
        "___CSS_LOADER_EXPORT___.locals = {\"fake\":\"b\"};"
    );
    assert_eq!(extract_locals(source), vec!["real"]);
}

#[test]
fn should_ignore_text_before_the_marker() {
    let source = "var decoy = {\"x\": 1};\n___CSS_LOADER_EXPORT___.locals = {\"key\":\"v\"};";
    assert_eq!(extract_locals(source), vec!["key"]);
}

#[test]
fn should_deduplicate_repeated_keys() {
    let source = r#"exports.locals = {"a":"1","a":"2","b":"3"};"#;
    assert_eq!(extract_locals(source), vec!["a", "b"]);
}

#[test]
fn should_not_descend_into_nested_object_values() {
    let source = r#"exports.locals = {"outer":{"inner":"x"},"next":"y"};"#;
    assert_eq!(extract_locals(source), vec!["outer", "next"]);
}

#[test]
fn should_preserve_quoted_and_numeric_keys_verbatim() {
    let source = r#"exports.locals = {"with-dash":"a",'single':"b",42:"c",bare:"d"};"#;
    assert_eq!(extract_locals(source), vec!["with-dash", "single", "42", "bare"]);
}

#[test]
fn should_handle_values_containing_braces_and_quotes() {
    let source = r#"exports.locals = {"a":"}{","b":"has \" quote","c":"y"};"#;
    assert_eq!(extract_locals(source), vec!["a", "b", "c"]);
}

#[test]
fn should_handle_concatenated_expression_values() {
    // css-loader emits expressions when composes pulls in other modules.
    let source = "exports.locals = {\"row\": \"a \" + imported[\"base\"] + \" b\", \"col\": \"c\"};";
    assert_eq!(extract_locals(source), vec!["row", "col"]);
}

#[test]
fn should_tolerate_whitespace_and_newlines_inside_the_literal() {
    let source = "exports.locals = {\n  \"a\": \"x\",\n  \"b\": \"y\"\n};";
    assert_eq!(extract_locals(source), vec!["a", "b"]);
}

#[test]
fn should_return_keys_seen_before_a_truncated_literal_ends() {
    let source = r#"exports.locals = {"a":"x","b":"y"#;
    assert_eq!(extract_locals(source), vec!["a", "b"]);
}

#[test]
fn should_return_empty_when_the_literal_has_no_keys() {
    assert!(extract_locals("exports.locals = {};").is_empty());
    assert!(extract_locals("exports.locals = {  };").is_empty());
}

#[test]
fn should_return_empty_when_no_object_follows_the_marker() {
    assert!(extract_locals("exports.locals = someRef;").is_empty());
    assert!(extract_locals("exports.locals").is_empty());
    assert!(extract_locals("exports.locals = ").is_empty());
}
