mod app;
pub mod confirm;
pub mod contacts_dialog;
pub mod date_picker;
mod sample_data;
pub mod select_widgets;

pub use app::OfficeApp;
