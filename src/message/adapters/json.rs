//! Rulesets kept as the JSON objects they were read from.
//!
//! These adapters never look inside the rules. They remember the object a
//! contract file held and write it back unchanged, which is all a message
//! needs to survive a read/write cycle.

use crate::message::{
    domain::SpecVersion,
    error::{RuleSetError, ValidationError, json_type_name},
    ports::{RuleSet, RuleSetResult},
};
use serde_json::{Map, Value};
use std::hash::{Hash, Hasher};

fn object_from_json(json: &Value) -> RuleSetResult<Map<String, Value>> {
    match json {
        Value::Object(map) => Ok(map.clone()),
        other => Err(RuleSetError::new(format!(
            "expected an object, found {}",
            json_type_name(other)
        ))),
    }
}

fn hash_object<H: Hasher>(map: &Map<String, Value>, state: &mut H) {
    // Keys iterate in sorted order, so the compact text is canonical.
    for (key, value) in map {
        key.hash(state);
        value.to_string().hash(state);
    }
}

/// Matching rules held as an opaque JSON object.
///
/// # Examples
///
/// ```
/// use pact_message::message::adapters::JsonMatchingRules;
/// use pact_message::message::domain::SpecVersion;
/// use pact_message::message::ports::RuleSet;
/// use serde_json::json;
///
/// let rules = JsonMatchingRules::from_json(&json!({"body": {"$.id": {"matchers": [{"match": "type"}]}}}))
///     .expect("object");
/// assert!(!rules.is_empty());
/// assert_eq!(rules.to_json(SpecVersion::V3)["body"]["$.id"]["matchers"][0]["match"], "type");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonMatchingRules(Map<String, Value>);

impl JsonMatchingRules {
    /// Creates an empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rules of one category, such as `body` or `metadata`.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>, rules: Value) -> Self {
        self.0.insert(category.into(), rules);
        self
    }

    /// Returns the rules of `category`.
    #[must_use]
    pub fn category(&self, category: &str) -> Option<&Value> {
        self.0.get(category)
    }
}

impl Hash for JsonMatchingRules {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_object(&self.0, state);
    }
}

impl RuleSet for JsonMatchingRules {
    fn from_json(json: &Value) -> RuleSetResult<Self> {
        object_from_json(json).map(Self)
    }

    fn to_json(&self, _version: SpecVersion) -> Value {
        Value::Object(self.0.clone())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate_for_version(&self, version: SpecVersion) -> Vec<ValidationError> {
        if !self.is_empty() && version < SpecVersion::V2 {
            vec![ValidationError::unsupported("matching rules", version)]
        } else {
            Vec::new()
        }
    }
}

/// Generators held as an opaque JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonGenerators(Map<String, Value>);

impl JsonGenerators {
    /// Creates an empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generators of one category, such as `body` or `metadata`.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>, generators: Value) -> Self {
        self.0.insert(category.into(), generators);
        self
    }

    /// Returns the generators of `category`.
    #[must_use]
    pub fn category(&self, category: &str) -> Option<&Value> {
        self.0.get(category)
    }
}

impl Hash for JsonGenerators {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_object(&self.0, state);
    }
}

impl RuleSet for JsonGenerators {
    fn from_json(json: &Value) -> RuleSetResult<Self> {
        object_from_json(json).map(Self)
    }

    fn to_json(&self, _version: SpecVersion) -> Value {
        Value::Object(self.0.clone())
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate_for_version(&self, version: SpecVersion) -> Vec<ValidationError> {
        if !self.is_empty() && version < SpecVersion::V3 {
            vec![ValidationError::unsupported("generators", version)]
        } else {
            Vec::new()
        }
    }
}
