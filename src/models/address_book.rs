//! Address book model
//!
//! The address book owns every [`Record`], keyed by the record's name. It keeps
//! insertion order, which is the order listings and the birthday query report
//! contacts in.
//!
//! # Upcoming birthdays
//!
//! A birthday is re-anchored to the current year, moved off the weekend
//! (Sunday to Monday, Saturday to Monday) and reported when it lands inside
//! `today..=today + horizon`. Two behaviors are deliberate and covered by tests:
//!
//! - dates are never rolled into next year, so a January birthday is not
//!   reported when queried in late December;
//! - a 29 February birthday cannot be re-anchored in a non-leap year and the
//!   whole query fails with [`ContactError::Operation`].

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::Record;
use crate::error::{ContactError, ContactResult};

/// Display format for congratulation dates
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the business day to do it on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Congratulation {
    pub name: String,
    pub date: NaiveDate,
}

impl Congratulation {
    /// The congratulation date as `YYYY.MM.DD`
    pub fn formatted_date(&self) -> String {
        self.date.format(CONGRATULATION_DATE_FORMAT).to_string()
    }
}

/// On-disk shape of the address book
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AddressBookData {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Collection of contacts keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AddressBookData", into = "AddressBookData")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Insert a record, replacing any record stored under the same name
    ///
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a contact by exact name
    pub fn find(&self, name: &str) -> ContactResult<&Record> {
        self.records
            .iter()
            .find(|r| r.name().as_str() == name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    /// Look up a contact by exact name for in-place mutation
    pub fn find_mut(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.name().as_str() == name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    /// Remove a contact, returning the removed record
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| ContactError::contact_not_found(name))?;
        Ok(self.records.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(name, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|r| (r.name().as_str(), r))
    }

    /// Contacts to congratulate within `horizon_days` of the local date
    pub fn upcoming_birthdays(&self, horizon_days: u32) -> ContactResult<Vec<Congratulation>> {
        self.upcoming_birthdays_from(Local::now().date_naive(), horizon_days)
    }

    /// Contacts to congratulate within `horizon_days` of `today`
    pub fn upcoming_birthdays_from(
        &self,
        today: NaiveDate,
        horizon_days: u32,
    ) -> ContactResult<Vec<Congratulation>> {
        // Horizons past the last representable date cover everything after today
        let horizon_end = today
            .checked_add_signed(Duration::days(i64::from(horizon_days)))
            .unwrap_or(NaiveDate::MAX);
        let mut congratulations = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let candidate = NaiveDate::from_ymd_opt(today.year(), birthday.month(), birthday.day())
                .ok_or_else(|| {
                    ContactError::Operation(format!(
                        "birthday {} of '{}' does not exist in {}",
                        birthday,
                        record.name(),
                        today.year()
                    ))
                })?;
            let congratulation_date = next_business_day(candidate);

            if today <= congratulation_date && congratulation_date <= horizon_end {
                congratulations.push(Congratulation {
                    name: record.name().to_string(),
                    date: congratulation_date,
                });
            }
        }

        Ok(congratulations)
    }
}

/// Move a weekend date to the following Monday
fn next_business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sun => date + Duration::days(1),
        Weekday::Sat => date + Duration::days(2),
        _ => date,
    }
}

impl From<AddressBookData> for AddressBook {
    fn from(data: AddressBookData) -> Self {
        let mut book = AddressBook::new();
        for record in data.contacts {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for AddressBookData {
    fn from(book: AddressBook) -> Self {
        Self {
            contacts: book.records,
        }
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(name, record)| format!("{}: {}", name, record))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}
