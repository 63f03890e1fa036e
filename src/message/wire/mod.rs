//! JSON wire form of message interactions.
//!
//! A message is stored in a contract file as an object:
//!
//! ```json
//! {
//!   "description": "an order created event",
//!   "providerStates": [{ "name": "an order exists" }],
//!   "metaData": { "contentType": "application/json" },
//!   "contents": { "id": 1 },
//!   "matchingRules": { "body": { "$.id": { "matchers": [{ "match": "type" }] } } },
//!   "_id": "4e3b2a"
//! }
//! ```
//!
//! `contents` distinguishes four cases: absent (missing body), `null`, a
//! string, and a structured JSON value. Older files may carry a single
//! `providerState` string instead of `providerStates`.
//!
//! # Example
//!
//! ```
//! use pact_message::message::domain::{Message, SpecVersion};
//! use pact_message::message::wire;
//! use serde_json::json;
//!
//! let message: Message = wire::decode(&json!({
//!     "description": "a greeting",
//!     "providerState": "the greeter is awake",
//!     "contents": "hello",
//! }))
//! .expect("valid message");
//!
//! let encoded = wire::encode(&message, SpecVersion::V3);
//! assert_eq!(encoded["providerStates"][0]["name"], "the greeter is awake");
//! assert_eq!(encoded["contents"], "hello");
//! ```

mod decode;

pub use decode::decode;

use crate::message::{
    domain::{Message, SpecVersion},
    error::TranscodeError,
    ports::RuleSet,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Decodes a message from JSON text.
///
/// # Errors
///
/// Returns [`TranscodeError::Syntax`] for invalid JSON and any error of
/// [`decode`] for a malformed message object.
pub fn decode_str<M: RuleSet, G: RuleSet>(text: &str) -> Result<Message<M, G>, TranscodeError> {
    let json: Value = serde_json::from_str(text)?;
    decode(&json)
}

/// Encodes a message as its wire object for `version`.
#[must_use]
pub fn encode<M: RuleSet, G: RuleSet>(message: &Message<M, G>, version: SpecVersion) -> Value {
    Value::Object(message.to_wire_map(version))
}

/// Serialises the wire form at the default specification version.
impl<M: RuleSet, G: RuleSet> Serialize for Message<M, G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_wire_map(SpecVersion::default())
            .serialize(serializer)
    }
}

impl<'de, M: RuleSet, G: RuleSet> Deserialize<'de> for Message<M, G> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        decode(&json).map_err(serde::de::Error::custom)
    }
}
