//! Adapters for the message ports.
//!
//! - [`json::JsonMatchingRules`] and [`json::JsonGenerators`] implement the
//!   [`RuleSet`] port by carrying the ruleset JSON untouched.
//!
//! [`RuleSet`]: crate::message::ports::RuleSet

pub mod json;

pub use json::{JsonGenerators, JsonMatchingRules};
