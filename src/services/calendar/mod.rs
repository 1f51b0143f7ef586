// Date picker service module
// State machine, layout and field bindings for the popup calendar

pub mod binding;
pub mod controller;
pub mod renderer;

pub use binding::{BindingRegistry, BoundPicker, FieldBinding, FieldValues, SharedFields};
pub use controller::{CalendarController, CalendarPhase};
pub use renderer::{CalendarView, CellGrid, GridCell, MonthList, MonthListEntry};

use thiserror::Error;

/// Receives the chosen date as `DD/MM/YYYY`.
pub type DateCallback = Box<dyn FnMut(&str)>;

/// Errors from explicitly setting the picker's date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid date format: {0:?} (expected dd/mm/yyyy)")]
    InvalidFormat(String),
    #[error("Invalid date input: {0}")]
    InvalidInput(String),
}
