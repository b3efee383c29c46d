use crate::access_log::ExtractionError;
use crate::access_log::quoted::read_quoted;

#[test]
fn read_returns_remainder_after_closing_quote() {
    let (value, rest) = read_quoted(r#""abc" tail"#, "field").unwrap();

    assert_eq!(value, "abc");
    assert_eq!(rest, " tail");
}

#[test]
fn read_decodes_escaped_backslash() {
    let (value, _) = read_quoted(r#""a\\b\x5Cc""#, "field").unwrap();

    assert_eq!(value, r"a\b\c");
}

#[test]
fn read_keeps_unknown_escapes() {
    let (value, _) = read_quoted(r#""a\tb\xZZ""#, "field").unwrap();

    assert_eq!(value, r"a\tb\xZZ");
}

#[test]
fn read_keeps_hex_escapes_with_sign() {
    let (value, _) = read_quoted(r#""Foo/1.0 \x+1""#, "field").unwrap();

    assert_eq!(value, r"Foo/1.0 \x+1");
}

#[test]
fn read_keeps_non_ascii_hex_escapes() {
    let (value, _) = read_quoted(r#""caf\xC3\xA9""#, "field").unwrap();

    assert_eq!(value, r"caf\xC3\xA9");
}

#[test]
fn read_requires_opening_quote() {
    let err = read_quoted("abc", "request").unwrap_err();

    assert_eq!(err, ExtractionError::MissingField { field: "request" });
}
