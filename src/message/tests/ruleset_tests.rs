//! Unit tests for the JSON ruleset adapters.

use crate::message::{
    adapters::{JsonGenerators, JsonMatchingRules},
    domain::SpecVersion,
    error::ValidationError,
    ports::RuleSet,
};
use rstest::rstest;
use serde_json::{Value, json};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Decoding
// ============================================================================

#[rstest]
#[case(json!([]), "expected an object, found an array")]
#[case(json!("type"), "expected an object, found a string")]
#[case(json!(1), "expected an object, found a number")]
fn non_object_rulesets_are_rejected(#[case] json: Value, #[case] message: &str) {
    let rules = JsonMatchingRules::from_json(&json).expect_err("not an object");
    let generators = JsonGenerators::from_json(&json).expect_err("not an object");

    assert_eq!(rules.to_string(), message);
    assert_eq!(generators.to_string(), message);
}

#[rstest]
fn empty_object_is_the_empty_ruleset() {
    let rules = JsonMatchingRules::from_json(&json!({})).expect("object");

    assert!(rules.is_empty());
    assert_eq!(rules, JsonMatchingRules::default());
}

#[rstest]
fn rules_are_written_back_unchanged() {
    let json = json!({
        "body": {"$.id": {"combine": "AND", "matchers": [{"match": "integer"}]}},
        "metadata": {"contentType": {"matchers": [{"match": "regex", "regex": "json"}]}}
    });

    let rules = JsonMatchingRules::from_json(&json).expect("object");

    assert_eq!(rules.to_json(SpecVersion::V3), json);
    assert_eq!(rules.to_json(SpecVersion::V4), json);
}

// ============================================================================
// Equality and hashing
// ============================================================================

#[rstest]
fn insertion_order_does_not_affect_equality_or_hash() {
    let first = JsonGenerators::new()
        .with_category("body", json!({"$.a": {"type": "Uuid"}}))
        .with_category("metadata", json!({"id": {"type": "RandomInt"}}));
    let second = JsonGenerators::new()
        .with_category("metadata", json!({"id": {"type": "RandomInt"}}))
        .with_category("body", json!({"$.a": {"type": "Uuid"}}));

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));
}

#[rstest]
fn different_rules_are_unequal() {
    let integer = JsonMatchingRules::new()
        .with_category("body", json!({"$.id": {"matchers": [{"match": "integer"}]}}));
    let kind = JsonMatchingRules::new()
        .with_category("body", json!({"$.id": {"matchers": [{"match": "type"}]}}));

    assert_ne!(integer, kind);
}

// ============================================================================
// Version support
// ============================================================================

#[rstest]
#[case(SpecVersion::V1, 1)]
#[case(SpecVersion::V1_1, 1)]
#[case(SpecVersion::V2, 0)]
#[case(SpecVersion::V3, 0)]
fn matching_rules_need_version_two(#[case] version: SpecVersion, #[case] problems: usize) {
    let rules = JsonMatchingRules::new().with_category("body", json!({}));

    assert_eq!(rules.validate_for_version(version).len(), problems);
}

#[rstest]
#[case(SpecVersion::V2, 1)]
#[case(SpecVersion::V3, 0)]
#[case(SpecVersion::V4, 0)]
fn generators_need_version_three(#[case] version: SpecVersion, #[case] problems: usize) {
    let generators = JsonGenerators::new().with_category("body", json!({}));

    assert_eq!(generators.validate_for_version(version).len(), problems);
}

#[rstest]
fn empty_rulesets_are_valid_everywhere() {
    assert!(JsonMatchingRules::new().validate_for_version(SpecVersion::V1).is_empty());
    assert!(JsonGenerators::new().validate_for_version(SpecVersion::V1).is_empty());
}

#[rstest]
fn unsupported_rules_name_the_version() {
    let rules = JsonMatchingRules::new().with_category("body", json!({}));

    assert_eq!(
        rules.validate_for_version(SpecVersion::V1_1),
        vec![ValidationError::unsupported("matching rules", SpecVersion::V1_1)]
    );
}
