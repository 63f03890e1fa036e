//! Error types for decoding and validating message interactions.
//!
//! Uses `thiserror` for typed variants that callers can inspect.

use super::domain::SpecVersion;
use thiserror::Error;

/// Errors raised while decoding a message from its wire form.
///
/// Decoding is the only fallible path: a malformed top-level object is
/// reported, never repaired.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The top-level value is not a JSON object.
    #[error("expected a JSON object for a message, found {0}")]
    NotAnObject(&'static str),

    /// A required field is absent.
    #[error("message is missing required field '{0}'")]
    MissingField(&'static str),

    /// A field holds a value of the wrong JSON type.
    #[error("field '{field}' must be {expected}, found {found}")]
    InvalidField {
        /// The offending field.
        field: &'static str,
        /// The JSON type the field must have.
        expected: &'static str,
        /// The JSON type that was found.
        found: &'static str,
    },

    /// An element of `providerStates` could not be decoded.
    #[error("invalid provider state at index {index}: {source}")]
    ProviderState {
        /// The position of the element in `providerStates`.
        index: usize,
        /// The underlying decode error.
        source: serde_json::Error,
    },

    /// A matching-rule or generator ruleset could not be decoded.
    #[error("invalid {field}: {reason}")]
    RuleSet {
        /// The ruleset field, `matchingRules` or `generators`.
        field: &'static str,
        /// Description of the failure.
        reason: String,
    },
}

impl TranscodeError {
    /// Creates an invalid field error, naming the JSON type that was found.
    #[must_use]
    pub const fn invalid_field(
        field: &'static str,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        Self::InvalidField {
            field,
            expected,
            found: json_type_name(found),
        }
    }

    /// Creates a ruleset decode error.
    #[must_use]
    pub fn rule_set(field: &'static str, reason: impl Into<String>) -> Self {
        Self::RuleSet {
            field,
            reason: reason.into(),
        }
    }
}

/// Returns a short name for the JSON type of `value`.
#[must_use]
pub const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Problems that stop a message being written at a specification version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A ruleset has content the version cannot represent.
    #[error("{what} are not supported by specification version {version}")]
    Unsupported {
        /// What cannot be represented, e.g. "generators".
        what: String,
        /// The target version.
        version: SpecVersion,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates an unsupported-content error.
    #[must_use]
    pub fn unsupported(what: impl Into<String>, version: SpecVersion) -> Self {
        Self::Unsupported {
            what: what.into(),
            version,
        }
    }

    /// Combines validation errors into a single error.
    ///
    /// Returns `None` for an empty list and the error itself for a list of
    /// one.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 | 1 => errors.into_iter().next(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            Self::Unsupported { .. } => None,
        }
    }
}

/// Error reported by a ruleset port when its JSON form is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RuleSetError(pub String);

impl RuleSetError {
    /// Creates a ruleset error from a description.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}
