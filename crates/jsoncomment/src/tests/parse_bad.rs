use alloc::string::{String, ToString};

use rstest::rstest;

use crate::{ParserError, ParserOptions, SyntaxError, parse, parse_with_options};

fn assert_err_contains(err: &ParserError, expected_sub: &str, line: usize, col: usize) {
    let s = err.to_string();
    assert!(s.contains(expected_sub), "expected substring {expected_sub:?} in {s:?}");
    assert_eq!(err.line, line);
    assert_eq!(err.column, col);
}

fn strict() -> ParserOptions {
    ParserOptions {
        reject_truncated_input: true,
        ..Default::default()
    }
}

#[test]
fn error_malformed_keyword() {
    let err = parse(r#"{"a":tru}"#).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidLiteral("tru}".into()));
    assert_err_contains(&err, "invalid literal 'tru}'", 1, 6);
}

#[test]
fn error_display_includes_position() {
    let err = parse("[nope]").unwrap_err();
    assert_eq!(err.to_string(), "invalid literal 'nope' at 1:2");
}

#[rstest]
#[case("[nope]", "nope")]
#[case("[fals]", "fals]")]
#[case("[nul", "nul")]
#[case("[tRUE]", "tRUE")]
#[case("[falsy]", "falsy")]
#[case(r#"{"a": nil}"#, "nil}")]
fn error_malformed_keywords(#[case] text: &str, #[case] read: &str) {
    let err = parse(text).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidLiteral(read.into()));
}

#[test]
fn error_malformed_keyword_on_later_line() {
    let err = parse("{\n  \"a\": tru\n}").unwrap_err();
    assert_err_contains(&err, "invalid literal", 2, 8);
}

#[test]
fn error_line_comments_are_not_comments() {
    // `//` is not skipped, so the `n` of `note` starts a keyword.
    let err = parse("[1, // note\n 2]").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidLiteral("note".into()));
    assert_err_contains(&err, "invalid literal", 1, 8);
}

#[test]
fn error_invalid_hex_digit() {
    let err = parse(r#"["\u00G1"]"#).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidUnicodeEscapeChar('G'));
    assert_err_contains(&err, "invalid unicode escape", 1, 7);
}

#[test]
fn error_invalid_hex_digit_in_key() {
    let err = parse(r#"{"\uZZZZ": 1}"#).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidUnicodeEscapeChar('Z'));
}

#[rstest]
#[case("[1-2]", "1-2")]
#[case("[-]", "-")]
#[case("[1e]", "1e")]
#[case("[1.2.3]", "1.2.3")]
#[case("[--1]", "--1")]
#[case("[99999999999999999999]", "99999999999999999999")]
fn error_invalid_numbers(#[case] text: &str, #[case] literal: &str) {
    let err = parse(text).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::InvalidNumber(literal.into()));
    assert_eq!((err.line, err.column), (1, 2));
}

#[test]
fn error_depth_limit() {
    let options = ParserOptions {
        max_depth: Some(2),
        ..Default::default()
    };
    let err = parse_with_options("[[[1]]]", options).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::DepthLimitExceeded(2));
    assert_err_contains(&err, "nesting depth exceeds the limit of 2", 1, 4);
}

#[test]
fn error_depth_limit_counts_objects() {
    let options = ParserOptions {
        max_depth: Some(1),
        ..Default::default()
    };
    assert!(parse_with_options(r#"{"a": 1}"#, options).is_ok());
    let err = parse_with_options(r#"{"a": {}}"#, options).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::DepthLimitExceeded(1));
}

#[test]
fn error_deep_nesting_is_bounded_by_limit() {
    let options = ParserOptions {
        max_depth: Some(128),
        ..Default::default()
    };
    let text: String = core::iter::repeat_n('[', 100_000).collect();
    let err = parse_with_options(&text, options).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::DepthLimitExceeded(128));
}

#[rstest]
#[case(r#"{"a": 1"#)]
#[case("[1, 2")]
#[case(r#"["abc"#)]
#[case("[1 /* open")]
#[case(r#"{"a""#)]
#[case(r#"{"a":"#)]
#[case(r#"["\u00"#)]
#[case(r#"["\"#)]
#[case("/* open")]
fn error_truncated_input_in_strict_mode(#[case] text: &str) {
    let err = parse_with_options(text, strict()).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::UnexpectedEndOfInput);
}

#[test]
fn error_truncated_input_reports_end_position() {
    let err = parse_with_options("[1,\n 2", strict()).unwrap_err();
    assert_err_contains(&err, "unexpected end of input", 2, 3);
}

#[test]
fn errors_are_thread_safe_std_errors() {
    fn assert_error<E: core::error::Error + Send + Sync + 'static>(_: &E) {}
    let err = parse("[nope]").unwrap_err();
    assert_error(&err);
    let source = core::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("invalid literal 'nope'"));
}
