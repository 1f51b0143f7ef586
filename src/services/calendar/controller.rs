//! The date picker state machine.
//!
//! A controller is `Closed`, showing the day grid (`DayGrid`, the only phase
//! that accepts navigation and day clicks), or showing the month-jump list
//! (`MonthList`). Each controller owns its own [`CalendarState`], so several
//! fields can each keep a picker without sharing anything.

use super::renderer::{
    build_grid, build_header, build_month_list, CalendarView, MonthList, DAY_HEADERS,
};
use super::{CalendarError, DateCallback};
use crate::models::calendar::{AnchorPosition, CalendarCommand, DisplayedMonth};
use crate::utils::date::{
    format_uk_date, is_supported_year, parse_uk_date, UkDate, MAX_YEAR, MIN_YEAR,
};
use chrono::{Datelike, Local, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub enum CalendarPhase {
    Closed,
    DayGrid,
    MonthList(MonthList),
}

pub struct CalendarState {
    displayed: DisplayedMonth,
    selected_day: Option<u32>,
    phase: CalendarPhase,
    anchor: AnchorPosition,
    pending_callback: Option<DateCallback>,
}

impl CalendarState {
    fn closed(displayed: DisplayedMonth) -> Self {
        Self {
            displayed,
            selected_day: None,
            phase: CalendarPhase::Closed,
            anchor: AnchorPosition::default(),
            pending_callback: None,
        }
    }
}

impl std::fmt::Debug for CalendarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarState")
            .field("displayed", &self.displayed)
            .field("selected_day", &self.selected_day)
            .field("phase", &self.phase)
            .field("anchor", &self.anchor)
            .field("has_callback", &self.pending_callback.is_some())
            .finish()
    }
}

#[derive(Debug)]
pub struct CalendarController {
    state: CalendarState,
    /// Bumped on every re-render
    generation: u64,
}

impl Default for CalendarController {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarController {
    /// A closed picker displaying the current month.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            state: CalendarState::closed(DisplayedMonth::from_date(today)),
            generation: 0,
        }
    }

    /// Open the picker at `anchor`, seeded from `initial_text` when it holds a
    /// valid `dd/mm/yyyy` date and from today otherwise.
    pub fn open<F>(&mut self, anchor: AnchorPosition, initial_text: &str, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.open_at(anchor, initial_text, Local::now().date_naive(), callback);
    }

    /// As [`open`](Self::open), with an explicit date standing in for today.
    pub fn open_at<F>(
        &mut self,
        anchor: AnchorPosition,
        initial_text: &str,
        today: NaiveDate,
        callback: F,
    ) where
        F: FnMut(&str) + 'static,
    {
        let seed = parse_uk_date(initial_text).unwrap_or_else(|| UkDate::from(today));
        log::debug!("Opening date picker at {:?} on {}", anchor, seed);

        self.state = CalendarState {
            displayed: DisplayedMonth::from(seed),
            selected_day: Some(seed.day),
            phase: CalendarPhase::DayGrid,
            anchor,
            pending_callback: Some(Box::new(callback)),
        };
        self.rerender();
    }

    /// Choose a day of the displayed month. Reports the formatted date to the
    /// pending callback, closes the picker and returns the date.
    ///
    /// Ignored unless the day grid is active and `day` exists in the month.
    pub fn select_day(&mut self, day: u32) -> Option<String> {
        if !self.is_active() {
            log::debug!("Ignoring day {} while picker is inactive", day);
            return None;
        }
        if day == 0 || day > self.state.displayed.days() {
            log::warn!("Ignoring day {} outside {}", day, self.state.displayed);
            return None;
        }

        self.state.selected_day = Some(day);
        let date = format_uk_date(self.state.displayed.year(), self.state.displayed.month(), day);
        log::debug!("Date picked: {}", date);

        if let Some(mut callback) = self.state.pending_callback.take() {
            callback(&date);
        }
        self.state.phase = CalendarPhase::Closed;
        Some(date)
    }

    pub fn previous_month(&mut self) {
        self.navigate(DisplayedMonth::previous);
    }

    pub fn next_month(&mut self) {
        self.navigate(DisplayedMonth::next);
    }

    pub fn previous_year(&mut self) {
        self.navigate(|month| month.with_year(month.year() - 1));
    }

    pub fn next_year(&mut self) {
        self.navigate(|month| month.with_year(month.year() + 1));
    }

    fn navigate(&mut self, step: impl FnOnce(&DisplayedMonth) -> DisplayedMonth) {
        if !self.is_active() {
            log::debug!("Ignoring navigation while picker is inactive");
            return;
        }
        self.state.displayed = step(&self.state.displayed);
        self.rerender();
    }

    /// Show the month-jump list, disabling the day grid until a month is
    /// picked or the list is closed.
    pub fn open_month_list(&mut self) {
        if !self.is_active() {
            return;
        }
        self.state.phase = CalendarPhase::MonthList(build_month_list(self.state.displayed));
        self.rerender();
    }

    pub fn pick_from_month_list(&mut self, year: i32, month: u32) {
        if !matches!(self.state.phase, CalendarPhase::MonthList(_)) {
            log::debug!("Ignoring month pick while the month list is closed");
            return;
        }
        let Some(displayed) = DisplayedMonth::new(year, month) else {
            log::warn!("Ignoring month pick with month {}", month);
            return;
        };
        self.state.displayed = displayed;
        self.state.phase = CalendarPhase::DayGrid;
        self.rerender();
    }

    pub fn close_month_list(&mut self) {
        if matches!(self.state.phase, CalendarPhase::MonthList(_)) {
            self.state.phase = CalendarPhase::DayGrid;
            self.rerender();
        }
    }

    /// Close without choosing a date. The pending callback is dropped unused.
    pub fn dismiss(&mut self) {
        if self.is_visible() {
            log::debug!("Date picker dismissed");
        }
        self.state.phase = CalendarPhase::Closed;
        self.state.pending_callback = None;
    }

    /// Display `month` of `year`, and select `day` when given.
    ///
    /// Shows the day grid, closing the month list if it was open.
    pub fn set_date_from_components(
        &mut self,
        year: i32,
        month: u32,
        day: Option<u32>,
    ) -> Result<(), CalendarError> {
        if !is_supported_year(year) {
            return Err(CalendarError::InvalidInput(format!(
                "year {} is outside {}-{}",
                year, MIN_YEAR, MAX_YEAR
            )));
        }
        let displayed = DisplayedMonth::new(year, month).ok_or_else(|| {
            CalendarError::InvalidInput(format!("month {} is outside 1-12", month))
        })?;
        if let Some(day) = day {
            if day == 0 || day > displayed.days() {
                return Err(CalendarError::InvalidInput(format!(
                    "day {} is not in {}",
                    day, displayed
                )));
            }
        }

        self.state.displayed = displayed;
        if day.is_some() {
            self.state.selected_day = day;
        }
        self.show_grid();
        Ok(())
    }

    /// Display and select the date in a `dd/mm/yyyy` string.
    pub fn set_date_from_string(&mut self, text: &str) -> Result<(), CalendarError> {
        let date =
            parse_uk_date(text).ok_or_else(|| CalendarError::InvalidFormat(text.to_string()))?;
        self.set_date_from_components(date.year, date.month, Some(date.day))
    }

    /// Display and select `date`. Dates outside the supported years are
    /// clamped to the first or last day of the range.
    pub fn set_date(&mut self, date: NaiveDate) {
        let displayed = DisplayedMonth::from_date(date);
        let day = match date.year() {
            year if year > MAX_YEAR => displayed.days(),
            year if year < MIN_YEAR => 1,
            _ => date.day(),
        };
        if !is_supported_year(date.year()) {
            log::warn!("Clamping {} to {}", date, displayed);
        }
        self.state.displayed = displayed;
        self.state.selected_day = Some(day);
        self.show_grid();
    }

    fn show_grid(&mut self) {
        self.state.phase = CalendarPhase::DayGrid;
        self.rerender();
    }

    /// Apply a click. Returns the chosen date when the command picks a day.
    pub fn dispatch(&mut self, command: CalendarCommand) -> Option<String> {
        match command {
            CalendarCommand::SelectDay(day) => return self.select_day(day),
            CalendarCommand::PreviousMonth => self.previous_month(),
            CalendarCommand::NextMonth => self.next_month(),
            CalendarCommand::PreviousYear => self.previous_year(),
            CalendarCommand::NextYear => self.next_year(),
            CalendarCommand::OpenMonthList => self.open_month_list(),
            CalendarCommand::PickMonth { year, month } => self.pick_from_month_list(year, month),
            CalendarCommand::CloseMonthList => self.close_month_list(),
            CalendarCommand::Dismiss => self.dismiss(),
        }
        None
    }

    fn rerender(&mut self) {
        self.generation += 1;
        log::trace!(
            "Rendering {} (generation {})",
            self.state.displayed,
            self.generation
        );
    }

    /// The view of an open picker, `None` when closed.
    pub fn render(&self) -> Option<CalendarView> {
        let month_list = match &self.state.phase {
            CalendarPhase::Closed => return None,
            CalendarPhase::DayGrid => None,
            CalendarPhase::MonthList(list) => Some(list.clone()),
        };
        Some(CalendarView {
            header: build_header(self.state.displayed),
            day_headers: DAY_HEADERS,
            grid: build_grid(self.state.displayed, self.state.selected_day),
            month_list,
            active: self.is_active(),
        })
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state.phase, CalendarPhase::Closed)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state.phase, CalendarPhase::DayGrid)
    }

    pub fn phase(&self) -> &CalendarPhase {
        &self.state.phase
    }

    pub fn displayed_month(&self) -> DisplayedMonth {
        self.state.displayed
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.state.selected_day
    }

    pub fn anchor(&self) -> AnchorPosition {
        self.state.anchor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |date: &str| sink.borrow_mut().push(date.to_string()))
    }

    fn opened(initial: &str) -> (CalendarController, Rc<RefCell<Vec<String>>>) {
        let (seen, callback) = recorder();
        let mut controller = CalendarController::new();
        controller.open_at(AnchorPosition::new(10.0, 20.0), initial, today(), callback);
        (controller, seen)
    }

    #[test]
    fn test_new_controller_is_closed() {
        let controller = CalendarController::new();
        assert!(!controller.is_visible());
        assert!(controller.render().is_none());
    }

    #[test]
    fn test_open_seeds_from_valid_field() {
        let (controller, _) = opened("29/02/2000");
        assert!(controller.is_active());
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2000, 2).unwrap());
        assert_eq!(controller.selected_day(), Some(29));
        assert_eq!(controller.anchor(), AnchorPosition::new(10.0, 20.0));
    }

    #[test]
    fn test_open_falls_back_to_today() {
        let (controller, _) = opened("29/02/1900");
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2024, 6).unwrap());
        assert_eq!(controller.selected_day(), Some(15));

        let (controller, _) = opened("");
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2024, 6).unwrap());
    }

    #[test]
    fn test_select_day_reports_padded_date_and_closes() {
        let (mut controller, seen) = opened("01/03/2024");
        assert_eq!(controller.select_day(7), Some("07/03/2024".to_string()));
        assert_eq!(*seen.borrow(), vec!["07/03/2024".to_string()]);
        assert!(!controller.is_visible());

        // The callback is spent once a day has been chosen
        assert_eq!(controller.select_day(8), None);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_select_day_outside_month_is_ignored() {
        let (mut controller, seen) = opened("01/02/2023");
        assert_eq!(controller.select_day(29), None);
        assert_eq!(controller.select_day(0), None);
        assert!(seen.borrow().is_empty());
        assert!(controller.is_active());
    }

    #[test]
    fn test_month_navigation_wraps() {
        let (mut controller, _) = opened("15/12/2023");
        controller.next_month();
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2024, 1).unwrap());

        let (mut controller, _) = opened("15/01/2023");
        controller.previous_month();
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2022, 12).unwrap());
    }

    #[test]
    fn test_year_navigation() {
        let (mut controller, _) = opened("15/05/2023");
        controller.next_year();
        controller.next_year();
        controller.previous_year();
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2024, 5).unwrap());
    }

    #[test]
    fn test_navigation_rerenders() {
        let (mut controller, _) = opened("15/05/2023");
        let before = controller.generation();
        controller.next_month();
        assert_eq!(controller.generation(), before + 1);
    }

    #[test]
    fn test_month_list_blocks_grid_input() {
        let (mut controller, seen) = opened("15/05/2023");
        controller.open_month_list();
        assert!(controller.is_visible());
        assert!(!controller.is_active());

        let generation = controller.generation();
        controller.previous_month();
        controller.next_month();
        controller.next_year();
        assert_eq!(controller.select_day(3), None);
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2023, 5).unwrap());
        assert_eq!(controller.generation(), generation);
        assert!(seen.borrow().is_empty());

        let view = controller.render().unwrap();
        assert!(!view.active);
        assert_eq!(view.month_list.unwrap().entries().len(), 7);
    }

    #[test]
    fn test_pick_from_month_list() {
        let (mut controller, _) = opened("15/05/2023");
        controller.open_month_list();
        controller.pick_from_month_list(2023, 2);
        assert!(controller.is_active());
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2023, 2).unwrap());
        assert!(controller.render().unwrap().month_list.is_none());
    }

    #[test]
    fn test_pick_month_ignored_when_list_closed() {
        let (mut controller, _) = opened("15/05/2023");
        controller.pick_from_month_list(2020, 1);
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2023, 5).unwrap());
    }

    #[test]
    fn test_close_month_list_keeps_month() {
        let (mut controller, _) = opened("15/05/2023");
        controller.open_month_list();
        controller.close_month_list();
        assert!(controller.is_active());
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2023, 5).unwrap());
    }

    #[test]
    fn test_reopen_overwrites_state() {
        let (mut controller, first) = opened("15/05/2023");
        controller.open_month_list();

        let (second, callback) = recorder();
        controller.open_at(AnchorPosition::new(1.0, 2.0), "03/01/2020", today(), callback);
        assert!(controller.is_active());
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2020, 1).unwrap());
        assert_eq!(controller.selected_day(), Some(3));
        assert_eq!(controller.anchor(), AnchorPosition::new(1.0, 2.0));

        controller.select_day(4);
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec!["04/01/2020".to_string()]);
    }

    #[test]
    fn test_dismiss_does_not_report() {
        let (mut controller, seen) = opened("15/05/2023");
        controller.dismiss();
        assert!(!controller.is_visible());
        assert_eq!(controller.select_day(1), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_set_date_from_string() {
        let (mut controller, _) = opened("15/05/2023");
        controller.set_date_from_string("9/11/2021").unwrap();
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2021, 11).unwrap());
        assert_eq!(controller.selected_day(), Some(9));
    }

    #[test]
    fn test_set_date_from_bad_string_fails() {
        let (mut controller, _) = opened("15/05/2023");
        let err = controller.set_date_from_string("2021-11-09").unwrap_err();
        assert_eq!(err, CalendarError::InvalidFormat("2021-11-09".to_string()));
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2023, 5).unwrap());
    }

    #[test]
    fn test_set_date_from_components_validates() {
        let (mut controller, _) = opened("15/05/2023");
        assert!(matches!(
            controller.set_date_from_components(2023, 13, None),
            Err(CalendarError::InvalidInput(_))
        ));
        assert!(matches!(
            controller.set_date_from_components(2023, 2, Some(29)),
            Err(CalendarError::InvalidInput(_))
        ));

        controller.set_date_from_components(2024, 2, None).unwrap();
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2024, 2).unwrap());
        assert_eq!(controller.selected_day(), Some(15));
    }

    #[test]
    fn test_set_date_from_components_rejects_unsupported_year() {
        let (mut controller, _) = opened("15/05/2023");
        assert!(matches!(
            controller.set_date_from_components(200_000_000, 6, None),
            Err(CalendarError::InvalidInput(_))
        ));
        assert!(matches!(
            controller.set_date_from_components(0, 6, Some(1)),
            Err(CalendarError::InvalidInput(_))
        ));
        controller.next_month();
        assert_eq!(controller.displayed_month(), DisplayedMonth::new(2023, 6).unwrap());
    }

    #[test]
    fn test_year_navigation_stops_at_9999() {
        let (mut controller, seen) = opened("15/06/9999");
        controller.next_year();
        controller.next_month();
        controller.next_month();
        controller.next_month();
        controller.next_month();
        controller.next_month();
        controller.next_month();
        controller.next_month();
        assert_eq!(controller.displayed_month(), DisplayedMonth::LAST);

        let picked = controller.select_day(1).unwrap();
        assert_eq!(picked, "01/12/9999");
        assert_eq!(picked.len(), 10);
        assert_eq!(*seen.borrow(), vec![picked.clone()]);
        assert!(parse_uk_date(&picked).is_some());
    }

    #[test]
    fn test_year_navigation_stops_at_0001() {
        let (mut controller, _) = opened("15/02/0001");
        controller.previous_year();
        controller.previous_month();
        controller.previous_month();
        assert_eq!(controller.displayed_month(), DisplayedMonth::FIRST);
        assert_eq!(controller.select_day(31), Some("31/01/0001".to_string()));
    }

    #[test]
    fn test_set_date_clamps_far_future() {
        let mut controller = CalendarController::new();
        controller.set_date(NaiveDate::from_ymd_opt(12_000, 3, 4).unwrap());
        assert_eq!(controller.displayed_month(), DisplayedMonth::LAST);
        assert_eq!(controller.selected_day(), Some(31));
    }

    #[test]
    fn test_set_date_closes_month_list() {
        let (mut controller, _) = opened("15/05/2023");
        controller.open_month_list();
        controller.set_date(NaiveDate::from_ymd_opt(2022, 8, 1).unwrap());
        assert!(controller.is_active());
        assert_eq!(controller.selected_day(), Some(1));
    }

    #[test]
    fn test_dispatch_routes_commands() {
        let (mut controller, seen) = opened("15/05/2023");
        controller.dispatch(CalendarCommand::OpenMonthList);
        controller.dispatch(CalendarCommand::PickMonth { year: 2023, month: 9 });
        controller.dispatch(CalendarCommand::NextMonth);
        let picked = controller.dispatch(CalendarCommand::SelectDay(31));
        assert_eq!(picked, Some("31/10/2023".to_string()));
        assert_eq!(*seen.borrow(), vec!["31/10/2023".to_string()]);
    }

    #[test]
    fn test_controllers_are_independent() {
        let (mut first, _) = opened("15/05/2023");
        let (second, _) = opened("01/01/2020");
        first.next_month();
        assert_eq!(second.displayed_month(), DisplayedMonth::new(2020, 1).unwrap());
    }
}
