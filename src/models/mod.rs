//! Core data models for contact-book
//!
//! This module contains the address book domain: the three field value types
//! with their validators, the contact record, and the address book with its
//! upcoming-birthday query. Nothing here performs I/O or logging.

pub mod address_book;
pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use address_book::{AddressBook, Congratulation, CONGRATULATION_DATE_FORMAT};
pub use birthday::{validate_birthday, Birthday, BIRTHDAY_FORMAT};
pub use name::{validate_name, Name};
pub use phone::{validate_phone, Phone};
pub use record::Record;
