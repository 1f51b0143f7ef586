//! Options for selectable lists and the parent value → child options map.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Text shown by the placeholder option inserted at the top of a child list.
pub const PLACEHOLDER_TEXT: &str = "---------";

/// A single `{text, value}` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }

    /// The blank option with an empty value.
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self::new(text, "")
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Maps selected parent values to the ordered child options they make
/// available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionMap {
    entries: HashMap<String, Vec<SelectOption>>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the server payload: `{"parent": [{"text": "..", "value": ".."}]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse option map")
    }

    pub fn insert(&mut self, parent_value: impl Into<String>, options: Vec<SelectOption>) {
        self.entries.insert(parent_value.into(), options);
    }

    pub fn with(mut self, parent_value: impl Into<String>, options: Vec<SelectOption>) -> Self {
        self.insert(parent_value, options);
        self
    }

    pub fn get(&self, parent_value: &str) -> Option<&[SelectOption]> {
        self.entries.get(parent_value).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A selectable list: ordered options and the currently selected index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectList {
    options: Vec<SelectOption>,
    selected_index: Option<usize>,
}

impl SelectList {
    pub fn new(options: Vec<SelectOption>) -> Self {
        let selected_index = if options.is_empty() { None } else { Some(0) };
        Self {
            options,
            selected_index,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected_index.and_then(|index| self.options.get(index))
    }

    /// Select by position. Out of range indexes are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected_index = Some(index);
            true
        } else {
            false
        }
    }

    /// Select the first option with the given value.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.selected_index = None;
    }

    /// Append an option; the first option appended becomes selected.
    pub fn push(&mut self, option: SelectOption) {
        self.options.push(option);
        if self.selected_index.is_none() {
            self.selected_index = Some(0);
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_map_from_json_keeps_order() {
        let map = OptionMap::from_json(
            r#"{"uk": [{"text": "England", "value": "en"}, {"text": "Wales", "value": "wa"}]}"#,
        )
        .unwrap();
        let options = map.get("uk").unwrap();
        assert_eq!(options[0], SelectOption::new("England", "en"));
        assert_eq!(options[1], SelectOption::new("Wales", "wa"));
        assert!(map.get("fr").is_none());
    }

    #[test]
    fn test_option_map_from_bad_json() {
        assert!(OptionMap::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_select_list_selection() {
        let mut list = SelectList::new(vec![
            SelectOption::placeholder(PLACEHOLDER_TEXT),
            SelectOption::new("One", "1"),
        ]);
        assert_eq!(list.selected_index(), Some(0));
        assert!(list.select_value("1"));
        assert_eq!(list.selected().unwrap().text, "One");
        assert!(!list.select_index(5));
        assert_eq!(list.selected_index(), Some(1));
    }

    #[test]
    fn test_clear_then_push_selects_first() {
        let mut list = SelectList::new(vec![SelectOption::new("One", "1")]);
        list.clear();
        assert_eq!(list.selected_index(), None);
        list.push(SelectOption::placeholder(PLACEHOLDER_TEXT));
        assert_eq!(list.selected_index(), Some(0));
        assert!(list.selected().unwrap().is_placeholder());
    }
}
