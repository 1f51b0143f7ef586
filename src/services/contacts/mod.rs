//! Contact assignment screen logic.
//!
//! Holds the contacts offered for assignment, the current filter, and which
//! contacts have been picked. In [`AssignMode::Multiple`] picked contacts
//! collect in a selection list until the user assigns them; in
//! [`AssignMode::Single`] picking a contact is immediately followed by
//! assignment.

pub mod callbacks;

pub use callbacks::{
    Assignment, AssignmentTarget, ContactSlot, JobContactRole, JobContactsForm, JobContactsTarget,
    PopupWindow,
};

use crate::models::contact::{Contact, ContactField};
use crate::models::settings::AssignMode;
use thiserror::Error;

/// Problems reported to the user with a blocking alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("You have not selected any Contacts.")]
    EmptySelection,
    #[error("There are no Contacts to select.")]
    NoSelectableItems,
}

/// What happened after contacts were checked and confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Multiple mode: contacts moved into the selection list
    Added(usize),
    /// Single mode: the contact is ready to be assigned
    ReadyToAssign,
}

#[derive(Debug, Clone)]
pub struct AssignContacts {
    contacts: Vec<Contact>,
    mode: AssignMode,
    /// Indexes of contacts matching the current filter
    shown: Vec<usize>,
}

impl AssignContacts {
    pub fn new(contacts: Vec<Contact>, mode: AssignMode) -> Self {
        let shown = (0..contacts.len()).collect();
        Self {
            contacts,
            mode,
            shown,
        }
    }

    pub fn mode(&self) -> AssignMode {
        self.mode
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Show contacts whose `field` contains `criteria`, ignoring case.
    pub fn filter_by_field(&mut self, field: ContactField, criteria: &str) {
        let needle = criteria.to_lowercase();
        self.shown = self
            .matching(|contact| contact.field(field).to_lowercase().contains(&needle));
        log::debug!(
            "Filtered contacts by {:?} containing {:?}: {} shown",
            field,
            criteria,
            self.shown.len()
        );
    }

    /// Show contacts whose last name starts with `letter`, ignoring case.
    pub fn filter_by_letter(&mut self, letter: char) {
        let prefix = letter.to_lowercase().to_string();
        self.shown = self.matching(|contact| contact.last_name.to_lowercase().starts_with(&prefix));
    }

    pub fn show_all(&mut self) {
        self.shown = (0..self.contacts.len()).collect();
    }

    fn matching(&self, predicate: impl Fn(&Contact) -> bool) -> Vec<usize> {
        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| predicate(contact))
            .map(|(index, _)| index)
            .collect()
    }

    /// Contacts listed for picking: matching the filter and not already
    /// selected.
    pub fn visible(&self) -> Vec<&Contact> {
        self.shown
            .iter()
            .filter_map(|&index| self.contacts.get(index))
            .filter(|contact| !contact.selected)
            .collect()
    }

    pub fn selected(&self) -> Vec<&Contact> {
        self.contacts.iter().filter(|contact| contact.selected).collect()
    }

    /// Mark the checked contacts as selected.
    pub fn select_checked(&mut self, checked: &[i64]) -> Result<SelectOutcome, AssignError> {
        let candidates: Vec<i64> = self.visible().iter().map(|contact| contact.id).collect();
        if candidates.is_empty() {
            return Err(AssignError::NoSelectableItems);
        }
        let picked: Vec<i64> = candidates
            .into_iter()
            .filter(|id| checked.contains(id))
            .collect();
        if picked.is_empty() {
            return Err(AssignError::EmptySelection);
        }

        for contact in &mut self.contacts {
            match self.mode {
                AssignMode::Single => contact.selected = picked.first() == Some(&contact.id),
                AssignMode::Multiple => {
                    if picked.contains(&contact.id) {
                        contact.selected = true;
                    }
                }
            }
        }

        Ok(match self.mode {
            AssignMode::Multiple => SelectOutcome::Added(picked.len()),
            AssignMode::Single => SelectOutcome::ReadyToAssign,
        })
    }

    /// Move a contact back out of the selection list.
    pub fn deselect(&mut self, id: i64) {
        if let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) {
            contact.selected = false;
        }
    }

    pub fn confirmation_prompt(&self) -> &'static str {
        match self.mode {
            AssignMode::Single => "Are you sure you want to assign this Contact?",
            AssignMode::Multiple => "Are you sure you want to assign these Contacts?",
        }
    }

    /// The selection in the shape the opener expects.
    pub fn assignment(&self) -> Result<Assignment, AssignError> {
        let selected = self.selected();
        match self.mode {
            AssignMode::Single => selected
                .first()
                .map(|contact| Assignment::Single((*contact).clone()))
                .ok_or(AssignError::EmptySelection),
            AssignMode::Multiple if selected.is_empty() => Err(AssignError::EmptySelection),
            AssignMode::Multiple => Ok(Assignment::Multiple(
                selected.into_iter().cloned().collect(),
            )),
        }
    }

    /// Hand the selection to the screen that opened this one. The target is
    /// responsible for closing `window`.
    pub fn assign(
        &self,
        window: &mut PopupWindow,
        target: &mut dyn AssignmentTarget,
    ) -> Result<(), AssignError> {
        let assignment = self.assignment()?;
        log::info!("Assigning {} contact(s)", assignment.contacts().len());
        target.assign(window, assignment);
        Ok(())
    }
}
