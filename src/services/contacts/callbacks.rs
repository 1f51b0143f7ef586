//! The contract between an assignment popup and the screen that opened it,
//! and the job form's side of that contract.

use crate::models::contact::Contact;
use crate::models::select_option::SelectOption;

/// A popup window the assignment screen runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupWindow {
    title: String,
    open: bool,
}

impl PopupWindow {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            open: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Contacts picked on an assignment screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Single(Contact),
    Multiple(Vec<Contact>),
}

impl Assignment {
    pub fn contacts(&self) -> &[Contact] {
        match self {
            Assignment::Single(contact) => std::slice::from_ref(contact),
            Assignment::Multiple(contacts) => contacts,
        }
    }
}

/// Implemented by whatever opened an assignment popup. Implementations
/// must close the window once they've taken the assignment.
#[cfg_attr(test, mockall::automock)]
pub trait AssignmentTarget {
    fn assign(&mut self, window: &mut PopupWindow, assignment: Assignment);
}

/// Which of the job's contact slots an assignment popup fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobContactRole {
    JobContacts,
    Primary,
    Billing,
}

impl JobContactRole {
    pub fn title(&self) -> &'static str {
        match self {
            JobContactRole::JobContacts => "Assign Job Contacts",
            JobContactRole::Primary => "Assign Primary Contact",
            JobContactRole::Billing => "Assign Billing Contact",
        }
    }
}

/// A chosen contact shown on the job form, with the id submitted for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSlot {
    pub display: String,
    pub id: Option<i64>,
}

/// Contact-related state of the job edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobContactsForm {
    /// Options of the job contacts list with their selected flag
    pub job_contacts: Vec<(SelectOption, bool)>,
    pub primary_contact: ContactSlot,
    pub billing_contact: ContactSlot,
}

impl JobContactsForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the contacts to the job contacts list, selected.
    pub fn job_contacts_callback(&mut self, window: &mut PopupWindow, contacts: &[Contact]) {
        for contact in contacts {
            let option = SelectOption::new(contact.full_name(), contact.id.to_string());
            self.job_contacts.push((option, true));
        }
        window.close();
    }

    pub fn primary_contact_callback(&mut self, window: &mut PopupWindow, contact: &Contact) {
        Self::fill_slot(&mut self.primary_contact, contact);
        window.close();
    }

    pub fn billing_contact_callback(&mut self, window: &mut PopupWindow, contact: &Contact) {
        Self::fill_slot(&mut self.billing_contact, contact);
        window.close();
    }

    fn fill_slot(slot: &mut ContactSlot, contact: &Contact) {
        slot.display = contact.full_name();
        slot.id = Some(contact.id);
    }

    /// Ids of the job contacts that will be submitted.
    pub fn selected_job_contact_ids(&self) -> Vec<&str> {
        self.job_contacts
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(option, _)| option.value.as_str())
            .collect()
    }

    /// An assignment target that fills the slot for `role`.
    pub fn target(&mut self, role: JobContactRole) -> JobContactsTarget<'_> {
        JobContactsTarget { form: self, role }
    }
}

pub struct JobContactsTarget<'a> {
    form: &'a mut JobContactsForm,
    role: JobContactRole,
}

impl AssignmentTarget for JobContactsTarget<'_> {
    fn assign(&mut self, window: &mut PopupWindow, assignment: Assignment) {
        match self.role {
            JobContactRole::JobContacts => {
                self.form.job_contacts_callback(window, assignment.contacts());
            }
            JobContactRole::Primary | JobContactRole::Billing => {
                let Some(contact) = assignment.contacts().first() else {
                    log::warn!("Empty assignment for {:?}", self.role);
                    window.close();
                    return;
                };
                if assignment.contacts().len() > 1 {
                    log::warn!(
                        "{:?} takes one contact; using the first of {}",
                        self.role,
                        assignment.contacts().len()
                    );
                }
                if self.role == JobContactRole::Primary {
                    self.form.primary_contact_callback(window, contact);
                } else {
                    self.form.billing_contact_callback(window, contact);
                }
            }
        }
    }
}
