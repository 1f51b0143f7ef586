// Shared helpers with no UI or service dependencies

pub mod date;
