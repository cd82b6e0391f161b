//! Scalar value codecs
//!
//! Every attribute and leaf element of the document model goes through an
//! [`XmlValue`] implementation, so empty values are omitted on output the same
//! way everywhere.

use crate::error::{Error, Result};

/// Text codec for a scalar field
pub trait XmlValue: Sized {
    /// Decode the text of a present attribute or element
    fn decode_text(text: &str) -> Result<Self>;

    /// Value of a field that is absent from the document
    fn missing() -> Self;

    /// Encode the value; `None` means it is empty and the field is omitted
    fn encode_text(&self) -> Option<String>;
}

impl XmlValue for String {
    fn decode_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }

    fn missing() -> Self {
        String::new()
    }

    fn encode_text(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.clone())
        }
    }
}

/// Window geometry and scroll state
impl XmlValue for Option<i64> {
    fn decode_text(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse()
            .map(Some)
            .map_err(|_| Error::InvalidInteger(text.to_string()))
    }

    fn missing() -> Self {
        None
    }

    fn encode_text(&self) -> Option<String> {
        self.map(|v| v.to_string())
    }
}

/// Comma separated category list (`/Boston/Weather,/Harvard/Berkman`)
///
/// The comma is the only separator and cannot be escaped: an entry that
/// contains one comes back as several entries, and surrounding whitespace is
/// trimmed.
impl XmlValue for Vec<String> {
    fn decode_text(text: &str) -> Result<Self> {
        Ok(text
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect())
    }

    fn missing() -> Self {
        Vec::new()
    }

    fn encode_text(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.join(","))
        }
    }
}
