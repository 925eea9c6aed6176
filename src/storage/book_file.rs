//! The contacts document on disk
//!
//! The whole address book lives in one pretty-printed JSON file. Saves go
//! through a sibling `.tmp` file that is synced and renamed over the target,
//! so a crash mid-save leaves the previous book in place.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{ContactError, ContactResult};
use crate::models::AddressBook;

/// Read the address book stored at `path`
///
/// A missing file is an empty book. A file that cannot be read, is not JSON,
/// or holds an invalid contact is a `Storage` error naming the file.
pub fn read_book_file(path: &Path) -> ContactResult<AddressBook> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AddressBook::new()),
        Err(e) => {
            return Err(ContactError::Storage(format!(
                "Cannot read contacts file {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_slice(&bytes).map_err(|e| {
        ContactError::Storage(format!(
            "Contacts file {} is corrupt: {}",
            path.display(),
            e
        ))
    })
}

/// Replace the address book stored at `path`
pub fn write_book_file(path: &Path, book: &AddressBook) -> ContactResult<()> {
    let contents = serde_json::to_vec_pretty(book)
        .map_err(|e| ContactError::Storage(format!("Failed to serialize contacts: {}", e)))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| {
            ContactError::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;
    }

    let staging = staging_path(path);
    let written = File::create(&staging).and_then(|mut file| {
        file.write_all(&contents)?;
        file.write_all(b"\n")?;
        file.sync_all()
    });

    if let Err(e) = written.and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(ContactError::Storage(format!(
            "Failed to save contacts to {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

/// `contacts.json` is staged as `contacts.json.tmp` in the same directory
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
