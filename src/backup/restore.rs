//! Backup restoration for contact-book
//!
//! Restores the contacts file from a backup archive. The archived contacts
//! are parsed as an address book first, so a restore never writes data the
//! application could not load.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::config::paths::ContactPaths;
use crate::error::{ContactError, ContactResult};
use crate::models::AddressBook;
use crate::storage::write_book_file;

use super::manager::BackupArchive;

/// Handles restoring from backups
pub struct RestoreManager {
    paths: ContactPaths,
}

impl RestoreManager {
    pub fn new(paths: ContactPaths) -> Self {
        Self { paths }
    }

    /// Restore the contacts file from a backup file
    ///
    /// This overwrites the current contacts. Take a backup first.
    pub fn restore_from_file(&self, backup_path: &Path) -> ContactResult<RestoreResult> {
        let archive = read_archive(backup_path)?;
        self.restore_from_archive(&archive)
    }

    /// Restore the contacts file from a parsed archive
    pub fn restore_from_archive(&self, archive: &BackupArchive) -> ContactResult<RestoreResult> {
        let book = archive_book(archive)?;

        self.paths.ensure_directories()?;
        write_book_file(&self.paths.contacts_file(), &book)?;

        Ok(RestoreResult {
            schema_version: archive.schema_version,
            backup_date: archive.created_at,
            contacts_restored: book.len(),
        })
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> ContactResult<ValidationResult> {
        let archive = read_archive(backup_path)?;

        let (is_valid, contact_count) = match archive_book(&archive) {
            Ok(book) => (true, book.len()),
            Err(_) => (false, 0),
        };

        Ok(ValidationResult {
            is_valid,
            schema_version: archive.schema_version,
            backup_date: archive.created_at,
            contact_count,
        })
    }
}

fn read_archive(backup_path: &Path) -> ContactResult<BackupArchive> {
    let contents = fs::read_to_string(backup_path)
        .map_err(|e| ContactError::Io(format!("Failed to read backup file: {}", e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| ContactError::Json(format!("Failed to parse backup file: {}", e)))
}

/// Parse the archived contacts; an empty object stands for an empty book
fn archive_book(archive: &BackupArchive) -> ContactResult<AddressBook> {
    serde_json::from_value(archive.contacts.clone())
        .map_err(|e| ContactError::Backup(format!("Backup contains invalid contacts: {}", e)))
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    pub schema_version: u32,
    pub backup_date: DateTime<Utc>,
    pub contacts_restored: usize,
}

impl RestoreResult {
    pub fn summary(&self) -> String {
        format!(
            "Restored {} contact(s) from backup taken {}",
            self.contacts_restored,
            self.backup_date.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Result of validating a backup
#[derive(Debug)]
pub struct ValidationResult {
    /// Whether the archived contacts can be loaded
    pub is_valid: bool,
    pub schema_version: u32,
    pub backup_date: DateTime<Utc>,
    pub contact_count: usize,
}

impl ValidationResult {
    pub fn summary(&self) -> String {
        if self.is_valid {
            format!(
                "Valid backup (v{}): {} contact(s)",
                self.schema_version, self.contact_count
            )
        } else {
            format!("Invalid backup (v{}): contacts cannot be loaded", self.schema_version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::manager::BackupManager;
    use crate::config::settings::BackupRetention;
    use crate::models::Record;
    use crate::storage::read_book_file;
    use tempfile::TempDir;

    fn create_test_env() -> (RestoreManager, BackupManager, ContactPaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let backup_manager = BackupManager::new(paths.clone(), BackupRetention::default());
        let restore_manager = RestoreManager::new(paths.clone());

        (restore_manager, backup_manager, paths, temp_dir)
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut ann = Record::new("Ann").unwrap();
        ann.add_phone("1112223333").unwrap();
        book.add_record(ann);
        book.add_record(Record::new("Bob").unwrap());
        book
    }

    #[test]
    fn test_restore_from_backup() {
        let (restore_manager, backup_manager, paths, _temp) = create_test_env();
        let book = sample_book();
        write_book_file(&paths.contacts_file(), &book).unwrap();

        let backup_path = backup_manager.create_backup().unwrap();

        // Wipe the live data, then restore
        write_book_file(&paths.contacts_file(), &AddressBook::new()).unwrap();
        let result = restore_manager.restore_from_file(&backup_path).unwrap();

        assert_eq!(result.contacts_restored, 2);
        let restored = read_book_file(&paths.contacts_file()).unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_restore_empty_backup() {
        let (restore_manager, backup_manager, paths, _temp) = create_test_env();

        let backup_path = backup_manager.create_backup().unwrap();
        let result = restore_manager.restore_from_file(&backup_path).unwrap();

        assert_eq!(result.contacts_restored, 0);
        assert!(paths.contacts_file().exists());
    }

    #[test]
    fn test_validate_backup() {
        let (restore_manager, backup_manager, paths, _temp) = create_test_env();
        write_book_file(&paths.contacts_file(), &sample_book()).unwrap();

        let backup_path = backup_manager.create_backup().unwrap();
        let result = restore_manager.validate_backup(&backup_path).unwrap();

        assert!(result.is_valid);
        assert_eq!(result.schema_version, 1);
        assert_eq!(result.contact_count, 2);
        assert!(result.summary().contains("2 contact(s)"));
    }

    #[test]
    fn test_invalid_contacts_not_restored() {
        let (restore_manager, _backup_manager, paths, temp) = create_test_env();
        let backup_path = temp.path().join("backups").join("backup-20250101-000000-000.json");
        fs::write(
            &backup_path,
            r#"{"schema_version": 1, "created_at": "2025-01-01T00:00:00Z",
                "contacts": {"contacts": [{"name": "Ann", "phones": ["12"]}]}}"#,
        )
        .unwrap();

        let validation = restore_manager.validate_backup(&backup_path).unwrap();
        assert!(!validation.is_valid);

        let result = restore_manager.restore_from_file(&backup_path);
        assert!(matches!(result, Err(ContactError::Backup(_))));
        assert!(!paths.contacts_file().exists());
    }

    #[test]
    fn test_unparseable_backup() {
        let (restore_manager, _backup_manager, _paths, temp) = create_test_env();
        let path = temp.path().join("garbage.json");
        fs::write(&path, "nope").unwrap();

        assert!(matches!(
            restore_manager.validate_backup(&path),
            Err(ContactError::Json(_))
        ));
    }
}
