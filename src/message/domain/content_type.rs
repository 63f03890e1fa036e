//! Content-type declarations and their resolution from message metadata.

use super::{Charset, Metadata};
use mime::Mime;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Content type of JSON documents.
pub const APPLICATION_JSON: &str = "application/json";
/// Content type of plain text.
pub const TEXT_PLAIN: &str = "text/plain";
/// Content type of opaque binary payloads.
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// A parsed MIME type together with the declaration it was parsed from.
///
/// The declaration is kept verbatim because the JSON-family check is made
/// against it case-sensitively, while [`Mime`] normalises case.
///
/// # Examples
///
/// ```
/// use pact_message::message::domain::ContentType;
///
/// let ct: ContentType = "application/vnd.api+json; charset=UTF-8".parse().expect("valid");
/// assert!(ct.is_json());
/// assert!(!ct.is_octet_stream());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    declared: String,
    mime: Mime,
}

impl ContentType {
    /// Returns `application/json`.
    #[must_use]
    pub fn json() -> Self {
        Self::from_mime(mime::APPLICATION_JSON)
    }

    /// Returns `text/plain`.
    #[must_use]
    pub fn text() -> Self {
        Self::from_mime(mime::TEXT_PLAIN)
    }

    /// Returns `application/octet-stream`.
    #[must_use]
    pub fn octet_stream() -> Self {
        Self::from_mime(mime::APPLICATION_OCTET_STREAM)
    }

    /// Wraps an already parsed MIME type.
    #[must_use]
    pub fn from_mime(mime: Mime) -> Self {
        Self {
            declared: mime.to_string(),
            mime,
        }
    }

    /// Returns the parsed MIME type.
    #[must_use]
    pub const fn mime(&self) -> &Mime {
        &self.mime
    }

    /// Returns the declaration exactly as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.declared
    }

    /// Returns the `type/subtype` part as declared, without parameters.
    #[must_use]
    pub fn declared_essence(&self) -> &str {
        self.declared
            .split_once(';')
            .map_or(self.declared.as_str(), |(essence, _)| essence)
            .trim()
    }

    /// Returns `true` for the JSON family, `application/*json`.
    ///
    /// The match runs against the declared text and is case-sensitive, so
    /// `application/JSON` is not JSON family.
    #[must_use]
    pub fn is_json(&self) -> bool {
        let essence = self.declared_essence();
        essence
            .strip_prefix("application/")
            .is_some_and(|subtype| subtype.ends_with("json"))
    }

    /// Returns `true` only for `application/octet-stream`, matched against
    /// the declared text like [`ContentType::is_json`].
    #[must_use]
    pub fn is_octet_stream(&self) -> bool {
        self.declared_essence() == APPLICATION_OCTET_STREAM
    }

    /// Returns the charset declared by the `charset` parameter, or UTF-8.
    #[must_use]
    pub fn charset(&self) -> Charset {
        self.mime
            .get_param(mime::CHARSET)
            .map_or(Charset::Utf8, |label| Charset::from_label(label.as_str()))
    }
}

impl FromStr for ContentType {
    type Err = mime::FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let declared = s.trim();
        let mime = declared.parse::<Mime>()?;
        Ok(Self {
            declared: declared.to_owned(),
            mime,
        })
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declared)
    }
}

/// Resolves the content type explicitly declared in `metadata`.
///
/// Keys are compared case-insensitively against `contentType` and
/// `content-type`; the first matching key in key order wins. Non-string
/// values are read through their JSON text. A declaration that fails to parse
/// is logged and ignored.
#[must_use]
pub fn resolve(metadata: &Metadata) -> Option<ContentType> {
    let (key, value) = metadata
        .iter()
        .find(|(key, _)| is_content_type_key(key))?;

    let declared = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };

    declared
        .parse::<ContentType>()
        .inspect_err(|error| {
            tracing::debug!(
                key = key.as_str(),
                value = declared.as_str(),
                %error,
                "ignoring unparseable content type in message metadata"
            );
        })
        .ok()
}

/// Returns `true` if a metadata key declares a content type.
pub(crate) fn is_content_type_key(key: &str) -> bool {
    key.eq_ignore_ascii_case("contentType") || key.eq_ignore_ascii_case("content-type")
}
