//! Ruleset port for matching rules and generators.
//!
//! Messages carry matching rules and generators without looking inside
//! them. This port is the whole of what the message layer needs from a
//! ruleset engine.

use crate::message::{
    domain::SpecVersion,
    error::{RuleSetError, ValidationError},
};
use serde_json::Value;
use std::fmt::Debug;
use std::hash::Hash;

/// Result type for ruleset decoding.
pub type RuleSetResult<T> = Result<T, RuleSetError>;

/// Port for an opaque ruleset carried by a message.
///
/// # Implementation Notes
///
/// Implementations must keep `Eq` and `Hash` consistent, since both take
/// part in message equality. The empty ruleset is the `Default` value.
pub trait RuleSet: Clone + Debug + Default + Eq + Hash {
    /// Decodes the ruleset from the JSON stored in a contract file.
    ///
    /// # Errors
    ///
    /// Returns `RuleSetError` if `json` is not a valid ruleset.
    fn from_json(json: &Value) -> RuleSetResult<Self>;

    /// Encodes the ruleset in the format of `version`.
    fn to_json(&self, version: SpecVersion) -> Value;

    /// Returns `true` if the ruleset holds no rules.
    fn is_empty(&self) -> bool;

    /// Reports content that cannot be written at `version`.
    ///
    /// The default implementation accepts every version.
    fn validate_for_version(&self, version: SpecVersion) -> Vec<ValidationError> {
        let _ = version;
        Vec::new()
    }
}
