//! YAML export
//!
//! Same document as the JSON export, for human-readable backups.

use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::export::json::ContactExport;
use crate::models::AddressBook;

/// Export the address book as YAML
pub fn export_yaml<W: Write>(book: &AddressBook, writer: &mut W) -> ContactResult<()> {
    let export = ContactExport::from_book(book);

    writeln!(writer, "# Contact book export")
        .map_err(|e| ContactError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ContactError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ContactError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ContactError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_yaml_export() {
        let mut book = AddressBook::new();
        let mut ann = Record::new("Ann").unwrap();
        ann.add_phone("1112223333").unwrap();
        book.add_record(ann);

        let mut output = Vec::new();
        export_yaml(&book, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("# Contact book export"));

        let export: ContactExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(export.contact_count, 1);
        assert_eq!(export.contacts[0].name().as_str(), "Ann");
    }
}
