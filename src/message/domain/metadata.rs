//! Message metadata: free-form key/value pairs attached to a message.

use super::ContentType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Metadata associated with a message.
///
/// Values are arbitrary JSON. Keys are kept sorted so that the wire form is
/// stable. A content-type declaration may live here under `contentType` or
/// `content-type` (any case) and takes precedence over the body's own type.
///
/// # Examples
///
/// ```
/// use pact_message::message::domain::Metadata;
/// use serde_json::json;
///
/// let metadata = Metadata::new()
///     .with_entry("contentType", json!("application/json"))
///     .with_entry("destination", json!("orders"));
/// assert_eq!(metadata.len(), 2);
/// assert_eq!(
///     metadata.content_type().map(|ct| ct.to_string()),
///     Some("application/json".to_owned()),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, Value>);

impl Metadata {
    /// Creates empty metadata.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds an entry, replacing any previous value for the key.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Inserts an entry, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns the value stored under `key` (exact match).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the explicitly declared content type, if any parses.
    #[must_use]
    pub fn content_type(&self) -> Option<ContentType> {
        super::content_type::resolve(self)
    }

    /// Returns `true` if any key names a content type, whether or not its
    /// value parses.
    #[must_use]
    pub fn declares_content_type(&self) -> bool {
        self.0.keys().any(|key| super::content_type::is_content_type_key(key))
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the metadata into a JSON object.
    #[must_use]
    pub fn to_json_map(&self) -> serde_json::Map<String, Value> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl From<BTreeMap<String, Value>> for Metadata {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self(entries)
    }
}

impl FromIterator<(String, Value)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
