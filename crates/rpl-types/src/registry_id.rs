//! Registry identifier type.
//!
//! Registry identifiers are declared in the export schema as decimal text of
//! up to 19 digits. They are carried as opaque text rather than parsed into a
//! native integer, so very large identifiers survive untouched; equality and
//! ordering are raw string comparison, matching the source semantics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An identifier assigned by the medicinal products registry.
///
/// Used for both product and package identifiers.
///
/// # Examples
///
/// ```
/// use rpl_types::RegistryId;
///
/// let id = RegistryId::from("100042");
/// assert_eq!(id.as_str(), "100042");
/// assert_ne!(id, RegistryId::from("0100042"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryId(String);

impl RegistryId {
    /// Creates an identifier from its source text.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as source text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the source carried no identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RegistryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RegistryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RegistryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
