//! Contact service
//!
//! Applies shell-level contact operations to an address book and records
//! every mutation in the audit log. The address book itself stays free of
//! I/O; this is the layer that knows about storage.
//!
//! Changes are staged on a copy of the record and audited before they reach
//! the book, so a failed audit write leaves the book untouched.

use crate::error::ContactResult;
use crate::models::{AddressBook, Congratulation, Record};
use crate::storage::Storage;

/// What `add_contact` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new contact was created
    Created(Record),
    /// The phone was appended to an existing contact
    Updated(Record),
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
    storage: &'a Storage,
}

impl<'a> ContactService<'a> {
    pub fn new(book: &'a mut AddressBook, storage: &'a Storage) -> Self {
        Self { book, storage }
    }

    /// Create a contact, or append a phone to the existing one
    ///
    /// A new contact is only inserted once its phone (if any) has validated.
    pub fn add_contact(&mut self, name: &str, phone: Option<&str>) -> ContactResult<AddOutcome> {
        if self.book.contains(name) {
            let record = self.update(name, |record| match phone {
                Some(phone) => record.add_phone(phone),
                None => Ok(()),
            })?;
            return Ok(AddOutcome::Updated(record));
        }

        let mut record = Record::new(name)?;
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }

        self.storage.log_create(name, &record)?;
        self.book.add_record(record.clone());
        Ok(AddOutcome::Created(record))
    }

    /// Replace one phone number of a contact
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactResult<Record> {
        self.update(name, |record| record.edit_phone(old, new))
    }

    /// Remove a phone number from a contact
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactResult<Record> {
        self.update(name, |record| record.remove_phone(phone))
    }

    /// Set or replace a contact's birthday
    pub fn set_birthday(&mut self, name: &str, date: &str) -> ContactResult<Record> {
        self.update(name, |record| record.set_birthday(date))
    }

    /// Look up a contact
    pub fn find(&self, name: &str) -> ContactResult<&Record> {
        self.book.find(name)
    }

    /// Delete a contact
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        self.storage.log_delete(name, self.book.find(name)?)?;
        self.book.delete(name)
    }

    /// Contacts to congratulate in the next `days` days
    pub fn upcoming_birthdays(&self, days: u32) -> ContactResult<Vec<Congratulation>> {
        self.book.upcoming_birthdays(days)
    }

    /// Apply `change` to a copy of the contact, audit it, then store it
    ///
    /// Nothing is audited or stored when the change leaves the record as it
    /// was.
    fn update<F>(&mut self, name: &str, change: F) -> ContactResult<Record>
    where
        F: FnOnce(&mut Record) -> ContactResult<()>,
    {
        let before = self.book.find(name)?;
        let mut after = before.clone();
        change(&mut after)?;

        if *before == after {
            return Ok(after);
        }

        self.storage.log_update(name, before, &after)?;
        self.book.add_record(after.clone());
        Ok(after)
    }
}
