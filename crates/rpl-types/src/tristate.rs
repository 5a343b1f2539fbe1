//! Tri-state boolean encoding used by the registry schema.
//!
//! Boolean-like attributes in the export are the strings `"TAK"` (yes) and
//! `"NIE"` (no), with the empty string or an absent attribute meaning the
//! value was never stated. Collapsing this to a native `bool` would lose the
//! unstated case, and absence and `"NIE"` carry different meaning for some
//! fields, so the three states are kept apart.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::Deserialize;

/// A registry boolean: stated yes, stated no, or never stated.
///
/// # Examples
///
/// ```
/// use rpl_types::TriState;
///
/// assert_eq!(TriState::from_source("TAK"), TriState::Yes);
/// assert_eq!(TriState::from_source("NIE"), TriState::No);
/// assert_eq!(TriState::from_source(""), TriState::Unspecified);
/// assert_eq!(TriState::Yes.as_source(), "TAK");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TriState {
    /// Stated affirmatively (`"TAK"`).
    Yes,
    /// Stated negatively (`"NIE"`).
    No,
    /// Absent or empty in the source.
    #[default]
    Unspecified,
}

impl TriState {
    /// Source encoding of [`TriState::Yes`].
    pub const YES_TOKEN: &'static str = "TAK";
    /// Source encoding of [`TriState::No`].
    pub const NO_TOKEN: &'static str = "NIE";

    /// Decodes a source attribute value.
    ///
    /// Anything other than the two known tokens maps to `Unspecified`; the
    /// registry treats such values as "not stated" rather than an error.
    pub fn from_source(value: &str) -> Self {
        match value {
            Self::YES_TOKEN => Self::Yes,
            Self::NO_TOKEN => Self::No,
            _ => Self::Unspecified,
        }
    }

    /// Returns the source encoding of this value.
    pub fn as_source(self) -> &'static str {
        match self {
            Self::Yes => Self::YES_TOKEN,
            Self::No => Self::NO_TOKEN,
            Self::Unspecified => "",
        }
    }

    /// Returns true if the value was stated affirmatively.
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_source())
    }
}

impl serde::Serialize for TriState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_source())
    }
}

impl<'de> serde::Deserialize<'de> for TriState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_source(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tokens() {
        assert_eq!(TriState::from_source("TAK"), TriState::Yes);
        assert_eq!(TriState::from_source("NIE"), TriState::No);
        assert_eq!(TriState::from_source(""), TriState::Unspecified);
        // Lowercase or junk values are "not stated", never an error
        assert_eq!(TriState::from_source("tak"), TriState::Unspecified);
        assert_eq!(TriState::from_source("yes"), TriState::Unspecified);
    }

    #[test]
    fn test_encoding_roundtrip() {
        for state in [TriState::Yes, TriState::No, TriState::Unspecified] {
            assert_eq!(TriState::from_source(state.as_source()), state);
        }
    }

    #[test]
    fn test_default_is_unspecified() {
        assert_eq!(TriState::default(), TriState::Unspecified);
        assert!(!TriState::default().is_yes());
    }

    #[test]
    fn test_serde_uses_source_encoding() {
        let json = serde_json::to_string(&TriState::Yes).unwrap();
        assert_eq!(json, "\"TAK\"");

        let state: TriState = serde_json::from_str("\"NIE\"").unwrap();
        assert_eq!(state, TriState::No);

        let state: TriState = serde_json::from_str("\"\"").unwrap();
        assert_eq!(state, TriState::Unspecified);
    }
}
