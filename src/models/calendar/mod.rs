//! Calendar picker model types.
//!
//! The displayed month, the anchor a picker is drawn at, and the structured
//! commands produced by clicks on the picker.

use crate::utils::date::{days_in_month, is_supported_year, UkDate, MAX_YEAR, MIN_YEAR};
use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The (year, month) pair rendered in the day grid.
///
/// Always normalized: `month` stays within 1..=12, rollover carries into
/// the year, and the year stays within [`MIN_YEAR`]..=[`MAX_YEAR`] so every
/// date picked from it formats as `dd/mm/yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayedMonth {
    year: i32,
    month: u32,
}

impl DisplayedMonth {
    pub const FIRST: Self = Self {
        year: MIN_YEAR,
        month: 1,
    };
    pub const LAST: Self = Self {
        year: MAX_YEAR,
        month: 12,
    };

    /// Returns `None` when `month` is outside 1..=12 or `year` is outside
    /// the supported range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (is_supported_year(year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    /// The month containing `date`, clamped to the supported range.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_index(Self::index_of(date.year(), date.month()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    fn index_of(year: i32, month: u32) -> i64 {
        i64::from(year) * 12 + i64::from(month) - 1
    }

    fn from_index(index: i64) -> Self {
        let index = index.clamp(Self::FIRST.index(), Self::LAST.index());
        Self {
            year: index.div_euclid(12) as i32,
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    fn index(&self) -> i64 {
        Self::index_of(self.year, self.month)
    }

    /// Shift by a number of months, carrying into the year. Stops at
    /// [`FIRST`](Self::FIRST) and [`LAST`](Self::LAST).
    pub fn shifted(&self, delta: i32) -> Self {
        Self::from_index(self.index() + i64::from(delta))
    }

    pub fn previous(&self) -> Self {
        self.shifted(-1)
    }

    pub fn next(&self) -> Self {
        self.shifted(1)
    }

    /// Same month in `year`, clamped to the supported range.
    pub fn with_year(&self, year: i32) -> Self {
        Self {
            year: year.clamp(MIN_YEAR, MAX_YEAR),
            month: self.month,
        }
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl From<UkDate> for DisplayedMonth {
    fn from(date: UkDate) -> Self {
        Self::from_index(Self::index_of(date.year, date.month.clamp(1, 12)))
    }
}

impl std::fmt::Display for DisplayedMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// Screen position of the control that opened the picker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorPosition {
    pub x: f32,
    pub y: f32,
}

impl AnchorPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A click on one of the picker's controls, carrying the data of the cell or
/// entry that was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCommand {
    SelectDay(u32),
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    OpenMonthList,
    PickMonth { year: i32, month: u32 },
    CloseMonthList,
    Dismiss,
}
