//! Contact record model
//!
//! A record is one contact: an immutable name, an ordered list of phone
//! numbers and an optional birthday. Every mutator validates its input before
//! touching state, so a failed call leaves the record exactly as it was.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::{validate_birthday, Birthday};
use super::name::{validate_name, Name};
use super::phone::{validate_phone, Phone};
use crate::error::{ContactError, ContactResult};

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday
    pub fn new(name: &str) -> ContactResult<Self> {
        Ok(Self {
            name: validate_name(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, number: &str) -> ContactResult<()> {
        let phone = validate_phone(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`
    ///
    /// A malformed number is an error even when nothing would match. Removing
    /// a well-formed number the record does not have is a no-op.
    pub fn remove_phone(&mut self, number: &str) -> ContactResult<()> {
        let phone = validate_phone(number)?;
        if let Some(index) = self.phones.iter().position(|p| *p == phone) {
            self.phones.remove(index);
        }
        Ok(())
    }

    /// Replace `old` with `new` in place
    ///
    /// Both numbers are validated and `old` is located before anything is
    /// changed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let old_phone = validate_phone(old)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == old_phone)
            .ok_or_else(|| ContactError::phone_not_found(self.name.as_str(), old))?;
        let new_phone = validate_phone(new)?;

        self.phones[index] = new_phone;
        Ok(())
    }

    /// Find a phone by number
    pub fn find_phone(&self, number: &str) -> ContactResult<&Phone> {
        let phone = validate_phone(number)?;
        self.phones
            .iter()
            .find(|p| **p == phone)
            .ok_or_else(|| ContactError::phone_not_found(self.name.as_str(), number))
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn set_birthday(&mut self, date: &str) -> ContactResult<()> {
        self.birthday = Some(validate_birthday(date)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.phones.is_empty() {
            write!(f, "Phones: (none)")?;
        } else {
            let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
            write!(f, "Phones: {}", phones.join(", "))?;
        }

        match &self.birthday {
            Some(birthday) => write!(f, "; Birthday: {}", birthday),
            None => write!(f, "; Birthday: (not set)"),
        }
    }
}
