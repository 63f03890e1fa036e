//! Message bodies and their rendering per content family.
//!
//! A body is in exactly one of three states, fixed when it is built: missing
//! (never supplied), null (explicitly `null` on the wire) or present with a
//! byte payload. Rendering depends on the content type used for the decision:
//! JSON documents are pretty-printed, `application/octet-stream` is base64
//! encoded, and everything else is decoded as text.

use super::{Charset, ContentType};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// The body of a message.
///
/// Equality and hashing look at the state and the bytes only; the content
/// type descriptor travels with the bytes but does not change which body it
/// is.
///
/// # Examples
///
/// ```
/// use pact_message::message::domain::{Body, ContentType};
///
/// let body = Body::present(vec![0x00, 0xFF], Some(ContentType::octet_stream()));
/// assert_eq!(body.format(body.content_type()), "AP8=");
///
/// assert!(Body::Missing.is_missing());
/// assert_eq!(Body::Null.format(None), "");
/// ```
#[derive(Debug, Clone, Default)]
pub enum Body {
    /// No body was ever supplied; omitted from the wire form.
    #[default]
    Missing,
    /// An explicit JSON `null` body.
    Null,
    /// A body with a payload.
    Present {
        /// The raw payload.
        bytes: Vec<u8>,
        /// The content type the payload carries, if known.
        content_type: Option<ContentType>,
    },
}

impl Body {
    /// Creates a present body.
    #[must_use]
    pub fn present(bytes: impl Into<Vec<u8>>, content_type: Option<ContentType>) -> Self {
        Self::Present {
            bytes: bytes.into(),
            content_type,
        }
    }

    /// Creates a present body from text, encoded with the charset of
    /// `content_type` (UTF-8 when none is given).
    #[must_use]
    pub fn from_text(text: &str, content_type: Option<ContentType>) -> Self {
        let charset = content_type
            .as_ref()
            .map_or(Charset::Utf8, ContentType::charset);
        Self::Present {
            bytes: charset.encode(text),
            content_type,
        }
    }

    /// Creates a present JSON body from a JSON value.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        Self::Present {
            bytes: value.to_string().into_bytes(),
            content_type: Some(ContentType::json()),
        }
    }

    /// Returns `true` if no body was supplied.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns `true` for an explicit null body.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the body has a payload.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// Returns the payload, empty for missing and null bodies.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Present { bytes, .. } => bytes,
            Self::Missing | Self::Null => &[],
        }
    }

    /// Returns the content type carried by a present body.
    #[must_use]
    pub const fn content_type(&self) -> Option<&ContentType> {
        match self {
            Self::Present { content_type, .. } => content_type.as_ref(),
            Self::Missing | Self::Null => None,
        }
    }

    /// Decodes the payload using the body's own charset.
    #[must_use]
    pub fn text(&self) -> String {
        let charset = self.content_type().map_or(Charset::Utf8, ContentType::charset);
        charset.decode(self.bytes())
    }

    /// Renders the payload as a string for the given content type.
    ///
    /// Missing and null bodies render as the empty string.
    #[must_use]
    pub fn format(&self, content_type: Option<&ContentType>) -> String {
        if !self.is_present() {
            return String::new();
        }
        match content_type {
            Some(ct) if ct.is_json() => {
                let text = self.text();
                serde_json::from_str::<Value>(&text)
                    .inspect_err(|error| {
                        tracing::trace!(%error, "body is not valid JSON, rendering as text");
                    })
                    .ok()
                    .and_then(|json| serde_json::to_string_pretty(&json).ok())
                    .unwrap_or(text)
            }
            Some(ct) if ct.is_octet_stream() => BASE64_STANDARD.encode(self.bytes()),
            _ => self.text(),
        }
    }

    /// Parses the payload as JSON when `content_type` is in the JSON family.
    ///
    /// Returns `None` for missing and null bodies, for other content types,
    /// and when the text does not parse.
    #[must_use]
    pub fn parse_json(&self, content_type: Option<&ContentType>) -> Option<Value> {
        if !self.is_present() || !content_type.is_some_and(ContentType::is_json) {
            return None;
        }
        serde_json::from_str::<Value>(&self.text())
            .inspect_err(|error| {
                tracing::trace!(%error, "JSON body does not parse, embedding as text");
            })
            .ok()
    }

    /// Returns the body as a JSON value when it should be embedded as one.
    ///
    /// This is the case only for a present body whose `content_type` is in
    /// the JSON family and whose text parses to something other than a bare
    /// JSON string.
    #[must_use]
    pub fn structured_json(&self, content_type: Option<&ContentType>) -> Option<Value> {
        self.parse_json(content_type)
            .filter(|json| !json.is_string())
    }

    /// Returns `true` if [`Body::structured_json`] would yield a value.
    #[must_use]
    pub fn is_structured_json(&self, content_type: Option<&ContentType>) -> bool {
        self.structured_json(content_type).is_some()
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Missing, Self::Missing) | (Self::Null, Self::Null) => true,
            (Self::Present { bytes: lhs, .. }, Self::Present { bytes: rhs, .. }) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for Body {}

impl Hash for Body {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let Self::Present { bytes, .. } = self {
            bytes.hash(state);
        }
    }
}

/// Guesses the content type of a textual payload that declares none.
///
/// JSON objects and arrays are `application/json`, XML and HTML documents
/// are recognised by their opening markup, and anything else is plain text.
#[must_use]
pub fn detect_content_type(text: &str) -> ContentType {
    let trimmed = text.trim_start();
    let lowered = trimmed
        .chars()
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<Value>(trimmed).is_ok()
    {
        ContentType::json()
    } else if lowered.starts_with("<?xml") {
        ContentType::from_mime(mime::TEXT_XML)
    } else if lowered.starts_with("<html") || lowered.starts_with("<!doctype html") {
        ContentType::from_mime(mime::TEXT_HTML)
    } else {
        ContentType::text()
    }
}
