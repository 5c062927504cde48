//! Date parsing and rendering helpers.
//!
//! Dates travel through the crate as `YYYY-MM-DD` strings; these helpers are
//! the single place where that shape is checked and reformatted for display.

use chrono::{Datelike, NaiveDate};

/// Strict `YYYY-MM-DD` parse: rejects both malformed shapes (`2025-1-5`)
/// and impossible calendar dates (`2025-02-30`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let shape = regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").ok()?;
    if !shape.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn is_valid(s: &str) -> bool {
    parse_date(s).is_some()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Long form used by the document headers: `11 November 2025`.
/// Falls back to the raw input when it does not parse.
pub fn format_long(date: &str) -> String {
    match parse_date(date) {
        Some(d) => format!("{} {} {}", d.day(), month_name(d.month()), d.year()),
        None => date.to_string(),
    }
}

/// Table form: `11/11/2025`. Falls back to the raw input.
pub fn format_display(date: &str) -> String {
    match parse_date(date) {
        Some(d) => format!("{:02}/{:02}/{}", d.day(), d.month(), d.year()),
        None => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_zero_padded_shape() {
        assert!(parse_date("2025-11-01").is_some());
        assert!(parse_date("2025-1-1").is_none());
        assert!(parse_date("01-11-2025").is_none());
        assert!(parse_date("2025-02-30").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("not-a-date").is_none());
    }

    #[test]
    fn long_and_display_forms() {
        assert_eq!(format_long("2025-11-11"), "11 November 2025");
        assert_eq!(format_long("2025-11-05"), "5 November 2025");
        assert_eq!(format_display("2025-11-05"), "05/11/2025");
        assert_eq!(format_long("garbage"), "garbage");
    }
}
