//! Provider states: named preconditions an interaction depends on.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// A state the provider must be in for an interaction to apply.
///
/// # Examples
///
/// ```
/// use pact_message::message::domain::ProviderState;
/// use serde_json::json;
///
/// let state = ProviderState::new("an order exists").with_param("id", json!(42));
/// assert_eq!(state.name, "an order exists");
/// assert_eq!(state.params.get("id"), Some(&json!(42)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderState {
    /// The state description.
    pub name: String,
    /// Parameters for setting up the state.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, Value>,
}

impl ProviderState {
    /// Creates a provider state without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Decodes a provider state from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `json` is not an object with a
    /// string `name`.
    pub fn from_json(json: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(json)
    }

    /// Encodes the provider state as JSON. `params` is omitted when empty.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("name".to_owned(), Value::String(self.name.clone()));
        if !self.params.is_empty() {
            map.insert(
                "params".to_owned(),
                Value::Object(
                    self.params
                        .iter()
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect(),
                ),
            );
        }
        Value::Object(map)
    }
}

impl Hash for ProviderState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        for (key, value) in &self.params {
            key.hash(state);
            value.to_string().hash(state);
        }
    }
}
