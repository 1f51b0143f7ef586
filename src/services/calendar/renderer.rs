//! Layout for the picker: the 6×7 day grid and the month-jump list.
//!
//! Everything here is derived from a [`DisplayedMonth`] and the selected day;
//! nothing is stored between renders.

use crate::models::calendar::DisplayedMonth;
use chrono::Datelike;

/// Two-letter day headers, Monday first.
pub const DAY_HEADERS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Entries shown in the month-jump list.
pub const MONTH_LIST_LEN: usize = 7;
/// Entries listed before the displayed month, which sits in the middle.
const MONTH_LIST_BEFORE: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day { day: u32, selected: bool },
}

impl GridCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            GridCell::Blank => None,
            GridCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, GridCell::Day { selected: true, .. })
    }
}

/// A fixed 42-cell grid, rows of seven starting on Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<GridCell>,
}

impl CellGrid {
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.day().is_some()).count()
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.cells
            .iter()
            .find(|cell| cell.is_selected())
            .and_then(GridCell::day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthListEntry {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthList {
    entries: Vec<MonthListEntry>,
}

impl MonthList {
    pub fn entries(&self) -> &[MonthListEntry] {
        &self.entries
    }

    pub fn current(&self) -> Option<&MonthListEntry> {
        self.entries.iter().find(|entry| entry.current)
    }
}

/// Captions for the month control and the year control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarHeader {
    pub month_name: &'static str,
    pub previous_year: i32,
    pub year: i32,
    pub next_year: i32,
}

/// Everything needed to draw one frame of an open picker.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub header: CalendarHeader,
    pub day_headers: [&'static str; 7],
    pub grid: CellGrid,
    /// Present while the month-jump list is open
    pub month_list: Option<MonthList>,
    /// Whether the grid and navigation controls accept clicks
    pub active: bool,
}

/// Blank cells before the 1st so that the first column is Monday.
///
/// The 1st of every month in the supported year range is a valid chrono date,
/// so the zero fallback is never taken.
pub fn blank_cells_before(month: DisplayedMonth) -> usize {
    month
        .first_day()
        .map(|first| first.weekday().num_days_from_monday() as usize)
        .unwrap_or(0)
}

pub fn build_grid(month: DisplayedMonth, selected_day: Option<u32>) -> CellGrid {
    let blanks = blank_cells_before(month);
    let mut cells = Vec::with_capacity(GRID_CELLS);
    cells.extend(std::iter::repeat(GridCell::Blank).take(blanks));
    cells.extend((1..=month.days()).map(|day| GridCell::Day {
        day,
        selected: selected_day == Some(day),
    }));
    cells.resize(GRID_CELLS, GridCell::Blank);
    CellGrid { cells }
}

/// Seven consecutive months around `month`. At the ends of the supported
/// range the window slides inward so it still holds seven distinct months.
pub fn build_month_list(month: DisplayedMonth) -> MonthList {
    let last_start = DisplayedMonth::LAST.shifted(1 - MONTH_LIST_LEN as i32);
    let start = month.shifted(-MONTH_LIST_BEFORE).min(last_start);
    let entries = (0..MONTH_LIST_LEN as i32)
        .map(|offset| {
            let entry = start.shifted(offset);
            MonthListEntry {
                year: entry.year(),
                month: entry.month(),
                label: entry.to_string(),
                current: entry == month,
            }
        })
        .collect();
    MonthList { entries }
}

pub fn build_header(month: DisplayedMonth) -> CalendarHeader {
    CalendarHeader {
        month_name: month.name(),
        previous_year: month.year() - 1,
        year: month.year(),
        next_year: month.year() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn month(year: i32, month: u32) -> DisplayedMonth {
        DisplayedMonth::new(year, month).unwrap()
    }

    // Checked against a printed calendar.
    #[test_case(2024, 1, 0 ; "jan 2024 starts monday")]
    #[test_case(2024, 2, 3 ; "feb 2024 starts thursday")]
    #[test_case(2024, 3, 4 ; "mar 2024 starts friday")]
    #[test_case(2024, 9, 6 ; "sep 2024 starts sunday")]
    #[test_case(2023, 10, 6 ; "oct 2023 starts sunday")]
    #[test_case(2023, 4, 5 ; "apr 2023 starts saturday")]
    #[test_case(2000, 2, 1 ; "feb 2000 starts tuesday")]
    fn test_blank_cells_before(year: i32, m: u32, expected: usize) {
        assert_eq!(blank_cells_before(month(year, m)), expected);
    }

    #[test]
    fn test_grid_layout_for_leap_february() {
        let grid = build_grid(month(2024, 2), Some(29));
        assert_eq!(grid.cells().len(), GRID_CELLS);
        assert_eq!(grid.day_count(), 29);
        assert_eq!(grid.cells()[2], GridCell::Blank);
        assert_eq!(grid.cells()[3], GridCell::Day { day: 1, selected: false });
        assert_eq!(grid.cells()[31], GridCell::Day { day: 29, selected: true });
        assert!(grid.cells()[32..].iter().all(|cell| *cell == GridCell::Blank));
        assert_eq!(grid.selected_day(), Some(29));
    }

    #[test]
    fn test_grid_has_six_rows_of_seven() {
        let grid = build_grid(month(2023, 10), None);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), GRID_ROWS);
        assert!(rows.iter().all(|row| row.len() == GRID_COLUMNS));
        // October 2023 needs all six rows: six blanks then 31 days
        assert_eq!(rows[5][0], GridCell::Day { day: 30, selected: false });
        assert_eq!(grid.selected_day(), None);
    }

    #[test]
    fn test_selected_day_missing_from_short_month() {
        let grid = build_grid(month(2023, 2), Some(31));
        assert_eq!(grid.day_count(), 28);
        assert_eq!(grid.selected_day(), None);
    }

    #[test]
    fn test_month_list_centres_displayed_month() {
        let list = build_month_list(month(2024, 5));
        let labels: Vec<_> = list.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "February 2024",
                "March 2024",
                "April 2024",
                "May 2024",
                "June 2024",
                "July 2024",
                "August 2024",
            ]
        );
        assert_eq!(list.current().unwrap().month, 5);
    }

    #[test]
    fn test_month_list_wraps_year_both_ways() {
        let january = build_month_list(month(2024, 1));
        assert_eq!((january.entries()[0].year, january.entries()[0].month), (2023, 10));
        assert_eq!((january.entries()[6].year, january.entries()[6].month), (2024, 4));

        let december = build_month_list(month(2023, 12));
        assert_eq!((december.entries()[6].year, december.entries()[6].month), (2024, 3));
        assert_eq!(december.entries().iter().filter(|e| e.current).count(), 1);
    }

    #[test]
    fn test_month_list_at_range_edges() {
        let last = build_month_list(DisplayedMonth::LAST);
        assert_eq!((last.entries()[0].year, last.entries()[0].month), (9999, 6));
        assert!(last.entries()[6].current);
        assert_eq!(last.entries().iter().filter(|e| e.current).count(), 1);

        let first = build_month_list(DisplayedMonth::FIRST);
        assert_eq!((first.entries()[0].year, first.entries()[0].month), (1, 1));
        assert!(first.entries()[0].current);
        assert_eq!(first.entries().iter().filter(|e| e.current).count(), 1);
    }

    #[test]
    fn test_grid_at_range_edges() {
        // 1 January 0001 is a Monday in the proleptic Gregorian calendar
        assert_eq!(blank_cells_before(DisplayedMonth::FIRST), 0);
        assert_eq!(build_grid(DisplayedMonth::LAST, None).day_count(), 31);
    }

    #[test]
    fn test_header_years() {
        let header = build_header(month(2024, 7));
        assert_eq!(header.month_name, "July");
        assert_eq!((header.previous_year, header.year, header.next_year), (2023, 2024, 2025));
    }
}
