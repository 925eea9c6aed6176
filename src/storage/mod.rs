//! Storage layer for contact-book
//!
//! Persists the whole address book as one JSON document with atomic writes,
//! and owns the audit logger so services can record changes next to the data
//! they touch.

pub mod book_file;

pub use book_file::{read_book_file, write_book_file};

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::paths::ContactPaths;
use crate::error::ContactError;
use crate::models::AddressBook;

/// Storage coordinator for the contacts file and the audit log
pub struct Storage {
    paths: ContactPaths,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: ContactPaths) -> Result<Self, ContactError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Turn audit logging on or off for this session
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    /// Load the stored address book
    ///
    /// A missing file yields an empty book. An unreadable or invalid file is
    /// an error.
    pub fn load_book(&self) -> Result<AddressBook, ContactError> {
        read_book_file(&self.paths.contacts_file())
    }

    /// Save the whole address book
    pub fn save_book(&self, book: &AddressBook) -> Result<(), ContactError> {
        write_book_file(&self.paths.contacts_file(), book)
    }

    /// Record the creation of a contact
    pub fn log_create<T: Serialize>(&self, contact: &str, entity: &T) -> Result<(), ContactError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::create(contact, entity))
    }

    /// Record a change to a contact, with a diff of the changed fields
    pub fn log_update<T: Serialize>(
        &self,
        contact: &str,
        before: &T,
        after: &T,
    ) -> Result<(), ContactError> {
        if !self.audit_enabled {
            return Ok(());
        }
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit
            .log(&AuditEntry::update(contact, before, after, diff))
    }

    /// Record the deletion of a contact
    pub fn log_delete<T: Serialize>(&self, contact: &str, entity: &T) -> Result<(), ContactError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::delete(contact, entity))
    }
}
