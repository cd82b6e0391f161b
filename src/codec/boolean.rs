//! Boolean attributes (`isComment`, `isBreakpoint`)

use crate::error::{Error, Result};
use crate::xml::XmlValue;

/// Tri-state boolean
///
/// Documents only ever carry `False` or `True` after decoding: a missing or
/// empty attribute reads as `False`. `Unset` is what a freshly built outline
/// holds. Neither `Unset` nor `False` is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OpmlBool {
    #[default]
    Unset,
    False,
    True,
}

impl OpmlBool {
    /// Boolean value, `Unset` counting as false
    pub fn get(self) -> bool {
        self == OpmlBool::True
    }

    /// Check if this value has been set either way
    pub fn is_set(self) -> bool {
        self != OpmlBool::Unset
    }
}

impl From<bool> for OpmlBool {
    fn from(value: bool) -> Self {
        if value {
            OpmlBool::True
        } else {
            OpmlBool::False
        }
    }
}

impl From<OpmlBool> for bool {
    fn from(value: OpmlBool) -> Self {
        value.get()
    }
}

impl std::str::FromStr for OpmlBool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        const TRUE: [&str; 3] = ["true", "t", "1"];
        const FALSE: [&str; 3] = ["false", "f", "0"];

        if s.is_empty() {
            Ok(OpmlBool::False)
        } else if TRUE.iter().any(|lit| s.eq_ignore_ascii_case(lit)) {
            Ok(OpmlBool::True)
        } else if FALSE.iter().any(|lit| s.eq_ignore_ascii_case(lit)) {
            Ok(OpmlBool::False)
        } else {
            Err(Error::InvalidBoolean(s.to_string()))
        }
    }
}

impl XmlValue for OpmlBool {
    fn decode_text(text: &str) -> Result<Self> {
        text.parse()
    }

    fn missing() -> Self {
        OpmlBool::False
    }

    fn encode_text(&self) -> Option<String> {
        self.get().then(|| "true".to_string())
    }
}
