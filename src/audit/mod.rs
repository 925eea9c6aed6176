//! Audit logging system for contact-book
//!
//! Records every create, update and delete of a contact with before/after
//! snapshots in an append-only audit log. The address book core never logs;
//! entries are written by the service layer.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, contact name and
//!   optional before/after values.
//! - `AuditLogger`: writes entries to the audit log file as JSON lines.
//! - `generate_diff`: builds a human-readable summary of changed fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::audit::{AuditEntry, AuditLogger, generate_diff};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let diff = generate_diff(&before_json, &after_json);
//! logger.log(&AuditEntry::update("Ann", &before, &after, diff))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
