//! Asynchronous message interactions and their contract-file wire form.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: the [`domain::Message`] aggregate, its three-state
//!   [`domain::Body`], content-type resolution and provider states
//! - **Ports**: the [`ports::RuleSet`] interface for matching rules and
//!   generators, which are carried but never interpreted
//! - **Adapters**: [`adapters::JsonMatchingRules`] and
//!   [`adapters::JsonGenerators`], opaque JSON rulesets
//! - **Wire**: decoding and encoding of the JSON object stored in a contract
//!   file, including legacy fields
//!
//! # Example
//!
//! ```
//! use pact_message::message::domain::{Body, Message, Metadata, SpecVersion};
//! use pact_message::message::wire;
//! use serde_json::json;
//!
//! let message: Message = Message::new("an order created event")
//!     .with_body(Body::from_text(r#"{"id":1}"#, None))
//!     .with_metadata(Metadata::new().with_entry("contentType", json!("application/json")));
//!
//! let encoded = wire::encode(&message, SpecVersion::V3);
//! assert_eq!(encoded["contents"], json!({"id": 1}));
//!
//! let decoded: Message = wire::decode(&encoded).expect("valid message");
//! assert_eq!(decoded, message);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod wire;

#[cfg(test)]
mod tests;
