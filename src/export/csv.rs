//! CSV export
//!
//! One row per contact, spreadsheet-compatible.

use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Phone};

/// Export the address book as CSV
///
/// Phones are joined with `; ` and the birthday is written as DD.MM.YYYY.
pub fn export_csv<W: Write>(book: &AddressBook, writer: W) -> ContactResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Name", "Phones", "Birthday"])
        .map_err(|e| ContactError::Export(e.to_string()))?;

    for (name, record) in book.iter() {
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        let birthday = record
            .birthday()
            .map(|b| b.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([name, phones.join("; ").as_str(), birthday.as_str()])
            .map_err(|e| ContactError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_csv_export() {
        let mut book = AddressBook::new();
        let mut ann = Record::new("Ann Lee").unwrap();
        ann.add_phone("1112223333").unwrap();
        ann.add_phone("4445556666").unwrap();
        ann.set_birthday("10.06.1990").unwrap();
        book.add_record(ann);
        book.add_record(Record::new("Bob").unwrap());

        let mut output = Vec::new();
        export_csv(&book, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name,Phones,Birthday");
        assert_eq!(lines[1], "Ann Lee,1112223333; 4445556666,10.06.1990");
        assert_eq!(lines[2], "Bob,,");
    }

    #[test]
    fn test_csv_quotes_commas() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Lee, Ann").unwrap());

        let mut output = Vec::new();
        export_csv(&book, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"Lee, Ann\""));
    }
}
