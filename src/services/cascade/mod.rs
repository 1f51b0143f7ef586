//! Cascading selects.
//!
//! A [`CascadingSelect`] keeps a child list's options in step with the value
//! picked in a parent list. Dependents are updated after the child, in the
//! order they were added, which gives multi-level cascades such as
//! country → region → city. Dependents are owned by the updater they hang
//! off, so a cascade can't loop back on itself.

use crate::models::select_option::{OptionMap, SelectList, SelectOption, PLACEHOLDER_TEXT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeOptions {
    /// Fill the child as soon as the cascade is created when the parent
    /// already has a value selected.
    pub update_on_create: bool,
}

/// The selectable lists on a screen, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SelectStore {
    lists: HashMap<String, SelectList>,
}

impl SelectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, list_id: impl Into<String>, list: SelectList) {
        self.lists.insert(list_id.into(), list);
    }

    pub fn get(&self, list_id: &str) -> Option<&SelectList> {
        self.lists.get(list_id)
    }

    pub fn get_mut(&mut self, list_id: &str) -> Option<&mut SelectList> {
        self.lists.get_mut(list_id)
    }

    pub fn contains(&self, list_id: &str) -> bool {
        self.lists.contains_key(list_id)
    }

    /// Value of the option selected in `list_id`, ignoring the placeholder
    /// at index 0.
    pub fn chosen_value(&self, list_id: &str) -> Option<&str> {
        let list = self.lists.get(list_id)?;
        match list.selected_index() {
            Some(index) if index > 0 => list.selected().map(|option| option.value.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CascadingSelect {
    parent_id: String,
    child_id: String,
    option_map: OptionMap,
    options: CascadeOptions,
    placeholder: String,
    dependents: Vec<CascadingSelect>,
}

impl CascadingSelect {
    pub fn new(
        parent_id: impl Into<String>,
        child_id: impl Into<String>,
        option_map: OptionMap,
        options: CascadeOptions,
    ) -> Self {
        Self {
            parent_id: parent_id.into(),
            child_id: child_id.into(),
            option_map,
            options,
            placeholder: PLACEHOLDER_TEXT.to_string(),
            dependents: Vec::new(),
        }
    }

    /// Create the cascade for lists already in `store`, filling the child
    /// straight away when `update_on_create` is set, both lists exist and
    /// the parent has a value selected.
    pub fn create(
        parent_id: impl Into<String>,
        child_id: impl Into<String>,
        option_map: OptionMap,
        options: CascadeOptions,
        store: &mut SelectStore,
    ) -> Self {
        let cascade = Self::new(parent_id, child_id, option_map, options);
        cascade.initialize(store);
        cascade
    }

    /// Run the update-on-create check against `store`.
    pub fn initialize(&self, store: &mut SelectStore) {
        if self.options.update_on_create
            && store.chosen_value(&self.parent_id).is_some()
            && store.contains(&self.child_id)
        {
            self.update(store);
        }
    }

    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn child_id(&self) -> &str {
        &self.child_id
    }

    pub fn dependents(&self) -> &[CascadingSelect] {
        &self.dependents
    }

    /// Register a cascade whose lists depend on this one's child.
    pub fn add_dependent(&mut self, dependent: CascadingSelect) {
        self.dependents.push(dependent);
    }

    /// Rebuild the child list from the parent's selection, then update every
    /// dependent in registration order.
    pub fn update(&self, store: &mut SelectStore) {
        let chosen = store.chosen_value(&self.parent_id).map(str::to_string);

        let Some(child) = store.get_mut(&self.child_id) else {
            log::warn!("Select list {} not found; skipping update", self.child_id);
            return;
        };

        child.clear();
        child.push(SelectOption::placeholder(self.placeholder.clone()));
        if let Some(value) = chosen {
            match self.option_map.get(&value) {
                Some(options) => {
                    for option in options {
                        child.push(option.clone());
                    }
                }
                None => log::debug!("No options for {}={}", self.parent_id, value),
            }
        }

        for dependent in &self.dependents {
            dependent.update(store);
        }
    }

    /// Route a change event on `list_id` to every updater whose parent it is.
    /// Returns `false` when no list in this cascade has that id as a parent.
    pub fn handle_change(&self, store: &mut SelectStore, list_id: &str) -> bool {
        if self.parent_id == list_id {
            self.update(store);
            return true;
        }
        let mut handled = false;
        for dependent in &self.dependents {
            handled |= dependent.handle_change(store, list_id);
        }
        handled
    }

    /// Select `index` in `list_id` and apply the resulting change.
    pub fn select(&self, store: &mut SelectStore, list_id: &str, index: usize) -> bool {
        let selected = store
            .get_mut(list_id)
            .map(|list| list.select_index(index))
            .unwrap_or(false);
        if selected {
            self.handle_change(store, list_id);
        }
        selected
    }
}
