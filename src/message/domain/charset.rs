//! Text charsets a content type may declare for a message body.

use std::fmt;

/// A character set used to move between body bytes and text.
///
/// Only the charsets that can be handled without lookup tables are
/// supported. Anything else falls back to UTF-8 via [`Charset::from_label`].
///
/// # Examples
///
/// ```
/// use pact_message::message::domain::Charset;
///
/// assert_eq!(Charset::from_label("ISO-8859-1"), Charset::Latin1);
/// assert_eq!(Charset::Latin1.decode(&[0xE9]), "é");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// UTF-8, the default for every body.
    #[default]
    Utf8,
    /// ISO-8859-1 (Latin-1).
    Latin1,
    /// 7-bit US-ASCII.
    Ascii,
}

impl Charset {
    /// Maps a charset label (as found in a `charset=` parameter) to a charset.
    ///
    /// Labels are matched case-insensitively. Unknown labels are logged and
    /// treated as UTF-8.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().trim_matches('"').to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Self::Utf8,
            "iso-8859-1" | "iso8859-1" | "latin1" | "l1" => Self::Latin1,
            "us-ascii" | "ascii" => Self::Ascii,
            other => {
                tracing::debug!(charset = other, "unsupported charset, using UTF-8");
                Self::Utf8
            }
        }
    }

    /// Returns the canonical label of this charset.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
            Self::Ascii => "US-ASCII",
        }
    }

    /// Decodes bytes into text.
    ///
    /// Invalid sequences are replaced with `U+FFFD`.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Latin1 => bytes.iter().copied().map(char::from).collect(),
            Self::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { '\u{FFFD}' })
                .collect(),
        }
    }

    /// Encodes text into bytes.
    ///
    /// Characters the charset cannot represent are replaced with `?`.
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Latin1 => text
                .chars()
                .map(|c| u8::try_from(c).unwrap_or(b'?'))
                .collect(),
            Self::Ascii => text
                .chars()
                .map(|c| u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(b'?'))
                .collect(),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
