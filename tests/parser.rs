use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use chisel_descent::errors::{Category, Details};
use chisel_descent::{parse, JsonValue, Parser, ParserOptions, TrailingContent};

fn fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures/json")
        .join(name);
    fs::read(path).unwrap()
}

#[test]
fn should_parse_nested_structures() {
    let bytes = fixture("valid/nested.json");
    let parsed = parse(&bytes).unwrap();
    assert_eq!(
        parsed.pointer("/a/b/c/d/0/0/0/0/0/e"),
        Some(&JsonValue::Array(vec![
            JsonValue::Number(0.0),
            JsonValue::Number(-0.0),
            JsonValue::Number(1e10),
            JsonValue::Number(2500.0),
            JsonValue::Number(-0.125),
        ]))
    );
    assert_eq!(parsed.get("z").and_then(JsonValue::len), Some(5));
}

#[test]
fn should_decode_strings_in_documents() {
    let bytes = fixture("valid/blog_entries.json");
    let parsed = parse(&bytes).unwrap();
    assert_eq!(
        parsed.pointer("/0/body").and_then(JsonValue::as_str),
        Some("Line one\nLine two\t(tabbed) and a quote: \"hello\" / done")
    );
    assert_eq!(
        parsed.pointer("/1/title").and_then(JsonValue::as_str),
        Some("Café culture \u{1f600}")
    );
    assert_eq!(
        parsed.pointer("/1/rating").and_then(JsonValue::as_f64),
        Some(-0.0015)
    );
    assert!(parsed.pointer("/0/author/email").unwrap().is_null());
}

#[test]
fn should_borrow_from_the_input_where_possible() {
    let input = br#"{"plain":"text","escaped":"te\u0078t"}"#;
    let parsed = parse(input).unwrap();
    let members = parsed.as_object().unwrap();
    assert!(matches!(members[0].0, Cow::Borrowed("plain")));
    assert!(matches!(members[0].1, JsonValue::String(Cow::Borrowed("text"))));
    assert_eq!(members[1].1, JsonValue::String(Cow::Owned("text".to_string())));
    assert!(matches!(members[1].1, JsonValue::String(Cow::Owned(_))));
}

#[test]
fn should_keep_every_duplicate_key() {
    let bytes = fixture("valid/duplicate_keys.json");
    let parsed = parse(&bytes).unwrap();
    assert_eq!(parsed.len(), Some(3));
    assert_eq!(parsed.get_all("k").count(), 3);
    assert_eq!(parsed.pointer("/k/k/0"), Some(&JsonValue::Number(3.0)));
}

#[test]
fn should_report_errors_with_coordinates() {
    let err = parse(b"{\n  \"a\": 1,\n  \"b\" 2\n}").unwrap_err();
    assert_eq!(err.details, Details::ExpectedColon);
    assert_eq!(err.category(), Category::Syntax);
    assert_eq!(err.coords.absolute, 18);
    assert_eq!(err.coords.line, 3);
    assert_eq!(err.coords.column, 7);
    assert_eq!(
        err.to_string(),
        "expected ':' after key at [abs: 18, line: 3, column: 7]"
    );
}

#[test]
fn should_reject_each_invalid_fixture_with_the_right_details() {
    for (name, details, offset) in [
        ("invalid_1.json", Details::ExpectedKey, 19),
        ("unterminated_array.json", Details::EndOfInput, 6),
        ("unterminated_string.json", Details::EndOfInput, 22),
        ("bad_escape.json", Details::InvalidEscapeSequence('x'), 2),
        ("leading_zero.json", Details::InvalidArray, 2),
        ("trailing_content.json", Details::TrailingContent, 8),
        ("lone_surrogate.json", Details::UnpairedSurrogate(0xd800), 2),
        ("single_quotes.json", Details::ExpectedKey, 1),
        ("leading_plus.json", Details::ExpectedValue, 1),
        ("empty.json", Details::EndOfInput, 0),
    ] {
        let bytes = fixture(&format!("invalid/{}", name));
        let err = parse(&bytes).unwrap_err();
        assert_eq!((err.offset(), err.details), (offset, details), "{}", name);
    }
}

#[test]
fn should_switch_trailing_policy_through_options() {
    let bytes = fixture("invalid/trailing_content.json");
    let lenient =
        Parser::with_options(ParserOptions::default().with_trailing(TrailingContent::Ignore));
    let parsed = lenient.parse_bytes(&bytes).unwrap();
    assert_eq!(parsed.get("a"), Some(&JsonValue::Number(1.0)));
    assert_eq!(lenient.parse_prefix(&bytes).unwrap().1, 7);
}

#[test]
fn should_survive_adversarial_nesting() {
    let mut input = "[{\"a\":".repeat(50_000);
    input.push_str("null");
    let err = parse(input.as_bytes()).unwrap_err();
    assert_eq!(err.category(), Category::Resource);
    assert!(matches!(err.details, Details::DepthLimitExceeded(_)));

    let generous = Parser::with_options(ParserOptions::default().with_max_depth(512));
    let mut input = "[".repeat(512);
    input.push_str(&"]".repeat(512));
    assert!(generous.parse_str(&input).is_ok());
}

#[test]
fn should_reparse_equivalent_renderings_equally() {
    let compact = parse(br#"[{"id":1,"tags":["a","b"]},null,-2.5e0]"#).unwrap();
    let pretty = parse(
        b"[\r\n  {\r\n    \"id\" : 1e0,\r\n    \"tags\" : [ \"\\u0061\" , \"b\" ]\r\n  } ,\r\n  null ,\r\n  -2.5\r\n]\r\n",
    )
    .unwrap();
    assert_eq!(compact, pretty);
    assert_eq!(compact.clone().into_owned(), pretty);
}
