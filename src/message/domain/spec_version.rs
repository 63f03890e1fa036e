//! Contract-file specification versions.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The version of the contract-file specification a document is written for.
///
/// Versions are ordered, so `SpecVersion::V2 < SpecVersion::V3`. Message
/// interactions first appear in V3, which is the default.
///
/// # Examples
///
/// ```
/// use pact_message::message::domain::SpecVersion;
///
/// let version: SpecVersion = "3.0.0".parse().expect("known version");
/// assert_eq!(version, SpecVersion::V3);
/// assert_eq!(SpecVersion::default().to_string(), "3.0.0");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecVersion {
    /// Version 1.0.0.
    V1,
    /// Version 1.1.0.
    V1_1,
    /// Version 2.0.0.
    V2,
    /// Version 3.0.0.
    #[default]
    V3,
    /// Version 4.0.
    V4,
}

impl SpecVersion {
    /// Returns the version string written into contract files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "1.0.0",
            Self::V1_1 => "1.1.0",
            Self::V2 => "2.0.0",
            Self::V3 => "3.0.0",
            Self::V4 => "4.0",
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown specification version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown specification version: {0}")]
pub struct ParseSpecVersionError(pub String);

impl FromStr for SpecVersion {
    type Err = ParseSpecVersionError;

    /// Accepts the major version with an optional `v` prefix and any
    /// minor/patch suffix, except that `1.1` selects [`SpecVersion::V1_1`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed);
        let mut parts = digits.split('.');
        let major = parts.next().unwrap_or_default();
        let minor = parts.next().unwrap_or("0");
        match (major, minor) {
            ("1", "1") => Ok(Self::V1_1),
            ("1", _) => Ok(Self::V1),
            ("2", _) => Ok(Self::V2),
            ("3", _) => Ok(Self::V3),
            ("4", _) => Ok(Self::V4),
            _ => Err(ParseSpecVersionError(trimmed.to_owned())),
        }
    }
}
