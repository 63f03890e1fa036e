//! Unit tests for message bodies and their rendering.

use crate::message::domain::{Body, ContentType, detect_content_type};
use rstest::{fixture, rstest};
use serde_json::json;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn content_type(declared: &str) -> ContentType {
    declared.parse().expect("valid content type")
}

fn hash_of(body: &Body) -> u64 {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    hasher.finish()
}

#[fixture]
fn json_type() -> ContentType {
    ContentType::json()
}

// ============================================================================
// States
// ============================================================================

#[rstest]
fn default_body_is_missing() {
    assert!(Body::default().is_missing());
}

#[rstest]
#[case(Body::Missing, true, false, false)]
#[case(Body::Null, false, true, false)]
#[case(Body::present(Vec::new(), None), false, false, true)]
fn state_predicates(
    #[case] body: Body,
    #[case] missing: bool,
    #[case] null: bool,
    #[case] present: bool,
) {
    assert_eq!(body.is_missing(), missing);
    assert_eq!(body.is_null(), null);
    assert_eq!(body.is_present(), present);
}

#[rstest]
fn missing_and_null_bodies_have_no_bytes() {
    assert!(Body::Missing.bytes().is_empty());
    assert!(Body::Null.bytes().is_empty());
    assert_eq!(Body::Missing.text(), "");
    assert_eq!(Body::Null.content_type(), None);
}

#[rstest]
fn missing_null_and_empty_are_distinct() {
    let empty = Body::present(Vec::new(), None);

    assert_ne!(Body::Missing, Body::Null);
    assert_ne!(Body::Null, empty);
    assert_ne!(Body::Missing, empty);
}

#[rstest]
fn equality_ignores_content_type() {
    let as_json = Body::present(b"{}".to_vec(), Some(ContentType::json()));
    let as_text = Body::present(b"{}".to_vec(), Some(ContentType::text()));

    assert_eq!(as_json, as_text);
    assert_eq!(hash_of(&as_json), hash_of(&as_text));
}

#[rstest]
fn different_bytes_are_different_bodies() {
    assert_ne!(
        Body::present(b"a".to_vec(), None),
        Body::present(b"b".to_vec(), None)
    );
}

// ============================================================================
// Text and charsets
// ============================================================================

#[rstest]
fn text_uses_the_body_charset() {
    let body = Body::present(
        vec![b'c', b'a', b'f', 0xE9],
        Some(content_type("text/plain; charset=ISO-8859-1")),
    );

    assert_eq!(body.text(), "café");
}

#[rstest]
fn from_text_encodes_with_the_declared_charset() {
    let latin1 = Body::from_text("café", Some(content_type("text/plain; charset=ISO-8859-1")));
    let utf8 = Body::from_text("café", None);

    assert_eq!(latin1.bytes(), &[b'c', b'a', b'f', 0xE9_u8]);
    assert_eq!(utf8.bytes(), "café".as_bytes());
}

#[rstest]
fn from_json_is_compact_and_typed() {
    let body = Body::from_json(&json!({"b": 2, "a": 1}));

    assert_eq!(body.bytes(), br#"{"a":1,"b":2}"#);
    assert!(body.content_type().is_some_and(ContentType::is_json));
}

// ============================================================================
// Formatting
// ============================================================================

#[rstest]
fn octet_stream_formats_as_base64() {
    let body = Body::present(vec![0x00, 0xFF], None);

    assert_eq!(body.format(Some(&ContentType::octet_stream())), "AP8=");
}

#[rstest]
fn json_formats_pretty_with_sorted_keys(json_type: ContentType) {
    let body = Body::from_text(r#"{"b":1,"a":[1,2]}"#, None);

    assert_eq!(
        body.format(Some(&json_type)),
        "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": 1\n}"
    );
}

#[rstest]
fn invalid_json_formats_as_raw_text(json_type: ContentType) {
    let body = Body::from_text("{not json", None);

    assert_eq!(body.format(Some(&json_type)), "{not json");
}

#[rstest]
#[case(None)]
#[case(Some(ContentType::text()))]
#[case(Some(content_type("application/xml")))]
fn other_types_format_verbatim(#[case] declared: Option<ContentType>) {
    let body = Body::from_text(r#"{"b":1}"#, None);

    assert_eq!(body.format(declared.as_ref()), r#"{"b":1}"#);
}

#[rstest]
fn uppercase_json_type_is_not_reformatted() {
    let body = Body::from_text(r#"{"b":1}"#, None);

    assert_eq!(body.format(Some(&content_type("application/JSON"))), r#"{"b":1}"#);
}

#[rstest]
#[case(Body::Missing)]
#[case(Body::Null)]
fn absent_bodies_format_empty(#[case] body: Body, json_type: ContentType) {
    assert_eq!(body.format(Some(&json_type)), "");
    assert_eq!(body.format(None), "");
}

// ============================================================================
// Structured embedding
// ============================================================================

#[rstest]
fn json_object_is_structured(json_type: ContentType) {
    let body = Body::from_text(r#"{"x":1}"#, None);

    assert_eq!(body.structured_json(Some(&json_type)), Some(json!({"x": 1})));
    assert!(body.is_structured_json(Some(&json_type)));
}

#[rstest]
#[case("[1,2]", json!([1, 2]))]
#[case("42", json!(42))]
#[case("true", json!(true))]
#[case("null", json!(null))]
fn non_string_json_values_are_structured(
    #[case] text: &str,
    #[case] expected: serde_json::Value,
    json_type: ContentType,
) {
    let body = Body::from_text(text, None);

    assert_eq!(body.structured_json(Some(&json_type)), Some(expected));
}

#[rstest]
fn bare_json_string_is_not_structured(json_type: ContentType) {
    let body = Body::from_text(r#""hello""#, None);

    assert!(!body.is_structured_json(Some(&json_type)));
    assert_eq!(body.parse_json(Some(&json_type)), Some(json!("hello")));
}

#[rstest]
fn non_json_types_are_never_structured() {
    let body = Body::from_text(r#"{"x":1}"#, None);

    assert!(!body.is_structured_json(Some(&ContentType::text())));
    assert!(!body.is_structured_json(None));
}

#[rstest]
fn unparseable_json_is_not_structured(json_type: ContentType) {
    let body = Body::from_text("{", None);

    assert_eq!(body.structured_json(Some(&json_type)), None);
    assert!(!Body::Null.is_structured_json(Some(&json_type)));
}

// ============================================================================
// Content-type detection
// ============================================================================

#[rstest]
#[case(r#"{"a":1}"#, "application/json")]
#[case("  [1, 2]", "application/json")]
#[case("{not json", "text/plain")]
#[case("<?xml version=\"1.0\"?><a/>", "text/xml")]
#[case("<!DOCTYPE html><html></html>", "text/html")]
#[case("<html><body/></html>", "text/html")]
#[case("hello", "text/plain")]
#[case("", "text/plain")]
fn detects_content_type_from_text(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(detect_content_type(text).to_string(), expected);
}
