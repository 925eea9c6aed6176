//! Birthday value type

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContactError, ContactResult};

/// Input and display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// The full date of birth
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month of birth, 1 to 12
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month of birth
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

/// Check the literal `DD.MM.YYYY` shape: two digits, dot, two digits, dot, four digits
fn has_birthday_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

/// Validate a birthday written as `DD.MM.YYYY`
///
/// The shape is checked before parsing because chrono's `%d`/`%m` also accept
/// single-digit fields. Impossible dates such as `31.02.2020` are rejected.
pub fn validate_birthday(value: &str) -> ContactResult<Birthday> {
    if !has_birthday_shape(value) {
        return Err(ContactError::InvalidDateFormat(value.to_string()));
    }

    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map(Birthday)
        .map_err(|_| ContactError::InvalidDateFormat(value.to_string()))
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_birthday() {
        let birthday = validate_birthday("01.01.2000").unwrap();
        assert_eq!(birthday.date().year(), 2000);
        assert_eq!(birthday.month(), 1);
        assert_eq!(birthday.day(), 1);
        assert_eq!(birthday.to_string(), "01.01.2000");
    }

    #[test]
    fn test_leap_day() {
        assert!(validate_birthday("29.02.2020").is_ok());
        assert!(matches!(
            validate_birthday("29.02.2021"),
            Err(ContactError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_impossible_dates_rejected() {
        for input in ["31.02.2020", "32.01.2020", "00.01.2020", "15.13.2020", "15.00.2020"] {
            assert!(validate_birthday(input).is_err(), "{} should fail", input);
        }
    }

    #[test]
    fn test_wrong_shape_rejected() {
        for input in [
            "",
            "1.1.2000",
            "01.1.2000",
            "01.01.00",
            "2000-01-01",
            "01/01/2000",
            "01.01.2000 ",
            "01.01.20000",
            "aa.bb.cccc",
        ] {
            assert!(
                matches!(validate_birthday(input), Err(ContactError::InvalidDateFormat(_))),
                "{:?} should fail",
                input
            );
        }
    }

    #[test]
    fn test_serializes_as_iso_date() {
        let birthday = validate_birthday("10.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1990-06-10\"");
    }
}
