//! Phone number value type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContactError, ContactResult};

/// Number of digits in a valid phone number
pub const PHONE_DIGITS: usize = 10;

/// A phone number of exactly ten ASCII digits
///
/// Equality is by exact string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Get the number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a candidate phone number
pub fn validate_phone(value: &str) -> ContactResult<Phone> {
    if !is_valid_phone(value) {
        return Err(ContactError::InvalidPhoneFormat(value.to_string()));
    }
    Ok(Phone(value.to_string()))
}

impl TryFrom<String> for Phone {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_valid_phone(&value) {
            return Err(ContactError::InvalidPhoneFormat(value));
        }
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
