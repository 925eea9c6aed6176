//! Custom error types for contact-book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The first group of variants is the domain
//! taxonomy raised by the address book core; the rest come from the
//! surrounding configuration, storage and shell layers.

use thiserror::Error;

/// The main error type for contact-book operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// A contact name was empty
    #[error("Name cannot be empty.")]
    EmptyName,

    /// A phone number was not exactly ten digits
    #[error("Invalid phone number format '{0}'. The phone number must contain 10 digits.")]
    InvalidPhoneFormat(String),

    /// A birthday did not match DD.MM.YYYY or is not a real date
    #[error("Invalid date format '{0}'. Use DD.MM.YYYY.")]
    InvalidDateFormat(String),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone not found: {phone} (contact '{contact}')")]
    PhoneNotFound { contact: String, phone: String },

    /// Anything the domain did not anticipate
    #[error("Operation failed: {0}")]
    Operation(String),

    /// A shell command was given too few arguments
    #[error("Not enough arguments. Usage: {0}")]
    Usage(&'static str),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backup and restore errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ContactError {
    /// Create a "not found" error for a contact name
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::ContactNotFound(name.into())
    }

    /// Create a "not found" error for a phone on a contact
    pub fn phone_not_found(contact: impl Into<String>, phone: impl Into<String>) -> Self {
        Self::PhoneNotFound {
            contact: contact.into(),
            phone: phone.into(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact-book operations
pub type ContactResult<T> = Result<T, ContactError>;
