//! Contact display formatting
//!
//! Formats contacts for terminal output in single-line and table views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{AddressBook, Phone, Record};

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phones")]
    phones: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
}

impl From<&Record> for ContactRow {
    fn from(record: &Record) -> Self {
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        Self {
            name: record.name().to_string(),
            phones: phones.join(", "),
            birthday: record
                .birthday()
                .map(|b| b.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Format one contact as `NAME: summary`
pub fn format_record(record: &Record) -> String {
    format!("{}: {}", record.name(), record)
}

/// Format every contact as a table, in address book order
pub fn format_contact_table(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }

    let rows: Vec<ContactRow> = book.iter().map(|(_, record)| record.into()).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n\nTotal: {} contact(s)", table, book.len())
}
