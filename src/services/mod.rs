//! Service layer for contact-book
//!
//! The service layer sits between the shell and the address book, applying
//! operations and recording them in the audit log.

pub mod contact;

pub use contact::{AddOutcome, ContactService};
