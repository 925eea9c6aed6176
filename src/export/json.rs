//! JSON export
//!
//! Exports the whole address book to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Record};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full address book export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub contact_count: usize,

    /// Contacts in address book order
    pub contacts: Vec<Record>,
}

impl ContactExport {
    pub fn from_book(book: &AddressBook) -> Self {
        let contacts: Vec<Record> = book.iter().map(|(_, record)| record.clone()).collect();
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_count: contacts.len(),
            contacts,
        }
    }
}

/// Export the address book as JSON
pub fn export_json<W: Write>(book: &AddressBook, writer: &mut W, pretty: bool) -> ContactResult<()> {
    let export = ContactExport::from_book(book);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ContactError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ContactError::Export(e.to_string()))?;
    Ok(())
}
