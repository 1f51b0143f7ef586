// Module exports for models

pub mod calendar;
pub mod contact;
pub mod select_option;
pub mod settings;
