//! Birthday display formatting

use crate::models::{Congratulation, Record, CONGRATULATION_DATE_FORMAT};

/// Format the upcoming-birthday list
pub fn format_congratulations(congratulations: &[Congratulation]) -> String {
    if congratulations.is_empty() {
        return "There are no upcoming birthdays.".to_string();
    }

    let mut output = String::from("Upcoming birthdays:");
    for congratulation in congratulations {
        output.push_str(&format!(
            "\n  {}: {}",
            congratulation.name,
            congratulation.formatted_date()
        ));
    }
    output
}

/// Format a single contact's birthday
pub fn format_birthday(record: &Record) -> String {
    match record.birthday() {
        Some(birthday) => format!(
            "Birthday of {}: {}",
            record.name(),
            birthday.date().format(CONGRATULATION_DATE_FORMAT)
        ),
        None => format!("{} has no birthday set.", record.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_congratulations_list() {
        let list = vec![
            Congratulation {
                name: "Ann".into(),
                date: NaiveDate::from_ymd_opt(2023, 6, 12).unwrap(),
            },
            Congratulation {
                name: "Bob".into(),
                date: NaiveDate::from_ymd_opt(2023, 6, 14).unwrap(),
            },
        ];

        assert_eq!(
            format_congratulations(&list),
            "Upcoming birthdays:\n  Ann: 2023.06.12\n  Bob: 2023.06.14"
        );
    }

    #[test]
    fn test_no_congratulations() {
        assert_eq!(format_congratulations(&[]), "There are no upcoming birthdays.");
    }

    #[test]
    fn test_format_birthday() {
        let mut record = Record::new("Ann").unwrap();
        assert_eq!(format_birthday(&record), "Ann has no birthday set.");

        record.set_birthday("10.06.1990").unwrap();
        assert_eq!(format_birthday(&record), "Birthday of Ann: 1990.06.10");
    }
}
