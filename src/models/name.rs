//! Contact name value type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContactError, ContactResult};

/// The display name that identifies a contact
///
/// Immutable once constructed. The only rule is that it is not empty; no
/// trimming or case folding is applied, so `"Ann"` and `"ann"` are different
/// contacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate a candidate contact name
pub fn validate_name(value: &str) -> ContactResult<Name> {
    if value.is_empty() {
        return Err(ContactError::EmptyName);
    }
    Ok(Name(value.to_string()))
}

impl TryFrom<String> for Name {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ContactError::EmptyName);
        }
        Ok(Self(value))
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
