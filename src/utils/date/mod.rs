// Date utility functions
// UK-format (dd/mm/yyyy) parsing, validation and formatting

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Years a `dd/mm/yyyy` string can carry.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Day counts for a non-leap year, January first.
pub const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

static UK_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0?[1-9]|[1-2][0-9]|3[0-1])/(0?[1-9]|1[0-2])/(\d{4})$")
        .expect("UK date pattern is valid")
});

/// A calendar date that has passed UK-format validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UkDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl UkDate {
    /// Build a date from components, returning `None` when they don't form a
    /// real calendar day within [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        if !is_supported_year(year) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Format as `DD/MM/YYYY`.
    pub fn to_uk_string(&self) -> String {
        format_uk_date(self.year, self.month, self.day)
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for UkDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl std::fmt::Display for UkDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_uk_string())
    }
}

pub fn is_supported_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an out of range
/// month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Parse a `dd/mm/yyyy` string. Single digit days and months are accepted.
///
/// Returns `None` when the text doesn't match the pattern or names a day the
/// month doesn't have (e.g. `31/04/2023`).
pub fn parse_uk_date(text: &str) -> Option<UkDate> {
    let captures = UK_DATE_PATTERN.captures(text.trim())?;
    let day = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    let year = captures[3].parse().ok()?;
    UkDate::new(year, month, day)
}

pub fn is_valid_uk_date(text: &str) -> bool {
    parse_uk_date(text).is_some()
}

/// Format components as `DD/MM/YYYY` with zero-padded day and month.
pub fn format_uk_date(year: i32, month: u32, day: u32) -> String {
    format!("{:02}/{:02}/{:04}", day, month, year)
}
