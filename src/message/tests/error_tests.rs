//! Unit tests for decode and validation errors.

use crate::message::{
    domain::SpecVersion,
    error::{RuleSetError, TranscodeError, ValidationError, json_type_name},
};
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// TranscodeError
// ============================================================================

#[rstest]
#[case(json!(null), "null")]
#[case(json!(true), "a boolean")]
#[case(json!(1.5), "a number")]
#[case(json!("s"), "a string")]
#[case(json!([]), "an array")]
#[case(json!({}), "an object")]
fn json_type_names(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(json_type_name(&value), expected);
}

#[rstest]
fn invalid_field_names_the_found_type() {
    let error = TranscodeError::invalid_field("metaData", "an object", &json!("x"));

    assert!(matches!(
        error,
        TranscodeError::InvalidField {
            field: "metaData",
            expected: "an object",
            found: "a string",
        }
    ));
    assert_eq!(
        error.to_string(),
        "field 'metaData' must be an object, found a string"
    );
}

#[rstest]
fn syntax_errors_convert_from_serde_json() {
    let source = serde_json::from_str::<Value>("{").expect_err("truncated input");

    let error = TranscodeError::from(source);

    assert!(matches!(error, TranscodeError::Syntax(_)));
    assert!(error.to_string().starts_with("invalid JSON: "));
}

#[rstest]
fn missing_field_and_ruleset_messages() {
    assert_eq!(
        TranscodeError::MissingField("description").to_string(),
        "message is missing required field 'description'"
    );
    assert_eq!(
        TranscodeError::rule_set("generators", RuleSetError::new("bad").0).to_string(),
        "invalid generators: bad"
    );
}

// ============================================================================
// ValidationError
// ============================================================================

#[rstest]
fn multiple_of_nothing_is_none() {
    assert_eq!(ValidationError::multiple(Vec::new()), None);
}

#[rstest]
fn multiple_of_one_is_that_error() {
    let single = ValidationError::unsupported("generators", SpecVersion::V2);

    let combined = ValidationError::multiple(vec![single.clone()]);

    assert_eq!(combined, Some(single));
}

#[rstest]
fn multiple_errors_are_joined() {
    let combined = ValidationError::multiple(vec![
        ValidationError::unsupported("matching rules", SpecVersion::V1),
        ValidationError::unsupported("generators", SpecVersion::V1),
    ])
    .expect("two errors");

    assert!(combined.is_multiple());
    assert_eq!(combined.errors().map(<[ValidationError]>::len), Some(2));
    assert_eq!(
        combined.to_string(),
        "multiple validation errors: matching rules are not supported by specification \
         version 1.0.0; generators are not supported by specification version 1.0.0"
    );
}

#[rstest]
fn single_error_has_no_children() {
    let error = ValidationError::unsupported("generators", SpecVersion::V2);

    assert!(!error.is_multiple());
    assert_eq!(error.errors(), None);
}
