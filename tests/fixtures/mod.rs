// Test fixtures - reusable test data
// Provides consistent dates, contacts and option maps across test files

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2025
    pub fn jan_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Returns Mar 15, 2024
    pub fn mid_march_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample contacts for the assignment screens
pub mod contacts {
    use office_widgets::models::contact::Contact;

    pub fn team() -> Vec<Contact> {
        vec![
            Contact::new(1, "Ada", "Lovelace")
                .with_company("Analytical Engines")
                .with_position("Programmer"),
            Contact::new(2, "Charles", "Babbage").with_company("Analytical Engines"),
            Contact::new(3, "Grace", "Hopper").with_position("Rear Admiral"),
            Contact::new(4, "Alan", "Turing").with_company("Bletchley Park"),
        ]
    }
}

/// Country → region → city option maps
pub mod options {
    use office_widgets::models::select_option::{OptionMap, SelectList, SelectOption};
    use office_widgets::services::cascade::SelectStore;

    pub fn regions() -> OptionMap {
        OptionMap::new()
            .with(
                "uk",
                vec![
                    SelectOption::new("England", "eng"),
                    SelectOption::new("Scotland", "sco"),
                ],
            )
            .with("fr", vec![SelectOption::new("Brittany", "bre")])
    }

    pub fn cities() -> OptionMap {
        OptionMap::new()
            .with(
                "eng",
                vec![
                    SelectOption::new("London", "lon"),
                    SelectOption::new("York", "yor"),
                ],
            )
            .with("sco", vec![SelectOption::new("Edinburgh", "edi")])
    }

    pub fn store() -> SelectStore {
        let mut store = SelectStore::new();
        store.insert(
            "country",
            SelectList::new(vec![
                SelectOption::placeholder("---------"),
                SelectOption::new("United Kingdom", "uk"),
                SelectOption::new("France", "fr"),
            ]),
        );
        store.insert("region", SelectList::new(vec![SelectOption::placeholder("---------")]));
        store.insert("city", SelectList::new(vec![SelectOption::placeholder("---------")]));
        store
    }
}
