//! contact-book - Terminal contact manager
//!
//! Stores named contacts with phone numbers and an optional birthday, and
//! works out whom to congratulate in the coming days, moving weekend
//! birthdays to the following Monday.
//!
//! # Architecture
//!
//! - `models`: Validated fields, `Record` and the `AddressBook`
//! - `error`: Custom error types
//! - `config`: Path resolution and user settings
//! - `storage`: JSON file persistence
//! - `audit`: Audit log of contact changes
//! - `backup`: Backup archives and restore
//! - `services`: Contact operations with audit logging
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Interactive shell and command handlers
//!
//! # Example
//!
//! ```rust
//! use contact_book::models::{AddressBook, Record};
//!
//! let mut record = Record::new("Ann").unwrap();
//! record.add_phone("1112223333").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//! assert!(book.find("Ann").is_ok());
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::ContactError;
