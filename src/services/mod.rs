// Service module exports

pub mod calendar;
pub mod cascade;
pub mod contacts;
pub mod settings;
