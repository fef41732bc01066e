//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A contact's name, the key of its entry in the address book.
///
/// The only rule is that a name is not empty. Nothing is trimmed or
/// case-folded: `"ann"` and `"Ann"` are two different contacts, and
/// surrounding whitespace is part of the key. Input read from the prompt is
/// split on whitespace first, so names typed there are always single words;
/// names built in code or loaded from JSON may contain spaces.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("Ann").unwrap();
/// assert_eq!(name.as_str(), "Ann");
/// assert_ne!(name, Name::new("ann").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for `""`. A whitespace-only
    /// string is kept as given.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// The name exactly as it was given, usable as the book's lookup key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
