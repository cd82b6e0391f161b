//! Error types for opml-rs

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML encoding error: {0}")]
    XmlEncoding(#[from] quick_xml::encoding::EncodingError),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// Document structure problems found above the tokenizer: missing or
    /// wrong root element, EOF inside an open element. Tag level errors
    /// (mismatched or unclosed tags, bad encoding, duplicate attributes)
    /// arrive as [`Error::Xml`], [`Error::XmlEncoding`] or [`Error::XmlAttr`];
    /// use [`Error::is_malformed`] to match all of them.
    #[error("Malformed document: {0}")]
    MalformedXml(String),

    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("Invalid boolean: {0:?}")]
    InvalidBoolean(String),

    #[error("Invalid integer: {0:?}")]
    InvalidInteger(String),
}

impl Error {
    /// True when the input itself is bad, false when the environment failed
    /// (file system, network). Only the latter is worth retrying.
    pub fn is_data_error(&self) -> bool {
        match self {
            Error::Io(_) => false,
            #[cfg(feature = "http")]
            Error::Http(_) => false,
            Error::Xml(quick_xml::Error::Io(_)) => false,
            _ => true,
        }
    }

    /// True when the document is not well-formed OPML, whichever layer
    /// noticed it
    pub fn is_malformed(&self) -> bool {
        match self {
            Error::Xml(quick_xml::Error::Io(_)) => false,
            Error::Xml(_) | Error::XmlEncoding(_) | Error::XmlAttr(_) => true,
            Error::MalformedXml(_) => true,
            _ => false,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_errors() {
        assert!(Error::InvalidBoolean("maybe".into()).is_data_error());
        assert!(Error::InvalidTimestamp("no valid time".into()).is_data_error());
        assert!(Error::MalformedXml("Unexpected EOF".into()).is_data_error());
    }

    #[test]
    fn test_environment_errors() {
        let err = Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(!err.is_data_error());
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_malformed_covers_tokenizer_errors() {
        let mismatched = "<opml version=\"1.0\"><head><title>tiny</head></opml>"
            .parse::<crate::Opml>()
            .unwrap_err();
        assert!(matches!(mismatched, Error::Xml(_)));
        assert!(mismatched.is_malformed());
        assert!(mismatched.is_data_error());

        assert!(Error::MalformedXml("Unexpected EOF".into()).is_malformed());
        assert!(!Error::InvalidBoolean("maybe".into()).is_malformed());
        assert!(!Error::InvalidTimestamp("yesterday".into()).is_malformed());
    }

    #[test]
    fn test_messages() {
        let err = Error::InvalidInteger("abc".into());
        assert_eq!(err.to_string(), "Invalid integer: \"abc\"");
        assert_eq!(
            Error::InvalidBoolean("maybe".into()).to_string(),
            "Invalid boolean: \"maybe\""
        );
    }
}
