//! Formatting Pipeline Tests

use std::path::Path;

use css_typed::format::format_declaration;
use css_typed::options::{FormatterKind, GenerateOptions};
use css_typed::prettier::prettier_available;

fn no_formatter(eol: Option<&str>, banner: Option<&str>) -> GenerateOptions {
    GenerateOptions {
        eol: eol.map(|s| s.to_string()),
        banner: banner.map(|s| s.to_string()),
        formatter: Some(FormatterKind::None),
    }
}

#[test]
fn should_prepend_the_banner_before_everything_else() {
    let options = no_formatter(Some("\n"), Some("// AUTOGENERATED"));
    let out = format_declaration("export interface A {\n}\n", Path::new("a.css.d.ts"), &options)
        .unwrap();
    assert!(out.starts_with("// AUTOGENERATED\n"));
}

#[test]
fn should_normalize_line_endings_to_crlf() {
    let options = no_formatter(Some("\r\n"), None);
    let out = format_declaration("a\nb\nc\n", Path::new("x.d.ts"), &options).unwrap();
    assert_eq!(out, "a\r\nb\r\nc\r\n");
}

#[test]
fn should_normalize_existing_crlf_to_lf() {
    let options = no_formatter(Some("\n"), None);
    let out = format_declaration("a\r\nb\r\n", Path::new("x.d.ts"), &options).unwrap();
    assert_eq!(out, "a\nb\n");
}

#[test]
fn should_apply_the_eol_policy_to_the_banner_too() {
    let options = no_formatter(Some("\r\n"), Some("// banner"));
    let out = format_declaration("body\n", Path::new("x.d.ts"), &options).unwrap();
    assert_eq!(out, "// banner\r\nbody\r\n");
}

#[test]
fn should_leave_text_without_terminators_unchanged() {
    let options = no_formatter(Some("\r\n"), None);
    let out = format_declaration("no newline", Path::new("x.d.ts"), &options).unwrap();
    assert_eq!(out, "no newline");
}

// When prettier is reachable the forced run must succeed on valid input;
// when it is not, the failure must surface instead of being swallowed.
#[test]
fn should_report_prettier_failures_or_format_successfully_when_present() {
    let options = GenerateOptions {
        eol: None,
        banner: None,
        formatter: Some(FormatterKind::Prettier),
    };
    let result = format_declaration(
        "export interface A {\n  a: string;\n}\n",
        Path::new("a.css.d.ts"),
        &options,
    );
    if prettier_available() {
        assert!(result.is_ok());
    } else {
        assert!(result.is_err());
    }
}
