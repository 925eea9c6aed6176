//! Backup system for contact-book
//!
//! Provides rolling backups of the contacts file with a configurable
//! retention policy, plus validated restore.
//!
//! # Backup Format
//!
//! Backups are JSON files named `backup-YYYYMMDD-HHMMSS-mmm.json` holding:
//! - `schema_version`: version for migration support
//! - `created_at`: timestamp when the backup was created
//! - `contacts`: the contacts file contents
//!
//! # Retention Policy
//!
//! By default the newest 30 daily backups and the newest 12 monthly backups
//! (taken on the first day of a month) are kept.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::backup::{BackupManager, RestoreManager};
//!
//! let manager = BackupManager::new(paths.clone(), settings.backup_retention.clone());
//! let (backup_path, _pruned) = manager.create_backup_with_retention()?;
//!
//! let result = RestoreManager::new(paths).restore_from_file(&backup_path)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager, BACKUP_SCHEMA_VERSION};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
