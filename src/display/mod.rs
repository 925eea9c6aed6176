//! Display formatting for terminal output
//!
//! Renders address book results for the shell and the one-shot commands.
//! The address book never formats for the user; everything user-facing lives
//! here.

pub mod birthday;
pub mod contact;

pub use birthday::{format_birthday, format_congratulations};
pub use contact::{format_contact_table, format_record};
