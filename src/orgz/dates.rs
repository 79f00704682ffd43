//! The fixed day-month-year date format used across tasks and finance
//! records, plus the timestamp notes carry.

use crate::error::{OrgzError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Parse a DD-MM-YYYY date string.
pub fn parse(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| OrgzError::InvalidDate(input.to_string()))
}

pub fn is_valid(input: &str) -> bool {
    parse(input).is_ok()
}

pub fn is_valid_stamp(input: &str) -> bool {
    NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT).is_ok()
}

/// Current local time rendered in the note-timestamp format.
pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_day_month_year() {
        assert!(is_valid("01-01-2024"));
        assert!(is_valid("29-02-2024"));
    }

    #[test]
    fn rejects_iso_order() {
        assert!(!is_valid("2024-01-01"));
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(!is_valid("32-01-2024"));
        assert!(!is_valid("29-02-2023"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(!is_valid(""));
        assert!(!is_valid("tomorrow"));
    }

    #[test]
    fn parse_orders_dates_correctly() {
        let early = parse("02-01-2024").unwrap();
        let late = parse("01-02-2024").unwrap();
        assert!(early < late);
    }

    #[test]
    fn now_stamp_is_well_formed() {
        assert!(is_valid_stamp(&now_stamp()));
    }
}
