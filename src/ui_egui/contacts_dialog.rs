//! Contact assignment window.
//!
//! Filter form and letter index on top, the matching contacts with check
//! boxes (or radio buttons in single mode) below, and in multiple mode the
//! contacts picked so far with a button to take each one back out.

use crate::models::contact::{Contact, ContactField};
use crate::models::settings::AssignMode;
use crate::services::contacts::{
    AssignContacts, AssignError, AssignmentTarget, JobContactRole, JobContactsForm, PopupWindow,
    SelectOutcome,
};
use egui_extras::{Column, TableBuilder};
use std::collections::BTreeSet;

/// Something the dialog needs the app to ask the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignDialogRequest {
    Alert(AssignError),
    ConfirmAssign,
}

pub struct AssignContactsDialog {
    screen: AssignContacts,
    role: JobContactRole,
    window: PopupWindow,
    filter_field: ContactField,
    criteria: String,
    /// Ids ticked in the contact table
    checked: BTreeSet<i64>,
}

impl AssignContactsDialog {
    pub fn new(contacts: Vec<Contact>, role: JobContactRole, mode: AssignMode) -> Self {
        Self {
            screen: AssignContacts::new(contacts, mode),
            role,
            window: PopupWindow::new(role.title()),
            filter_field: ContactField::LastName,
            criteria: String::new(),
            checked: BTreeSet::new(),
        }
    }

    pub fn role(&self) -> JobContactRole {
        self.role
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn prompt(&self) -> &'static str {
        self.screen.confirmation_prompt()
    }

    /// Move the ticked contacts into the selection.
    pub fn select_checked(&mut self) -> Option<AssignDialogRequest> {
        let checked: Vec<i64> = self.checked.iter().copied().collect();
        match self.screen.select_checked(&checked) {
            Ok(SelectOutcome::Added(count)) => {
                log::debug!("{} contact(s) added to the selection", count);
                self.checked.clear();
                None
            }
            Ok(SelectOutcome::ReadyToAssign) => {
                self.checked.clear();
                Some(AssignDialogRequest::ConfirmAssign)
            }
            Err(e) => Some(AssignDialogRequest::Alert(e)),
        }
    }

    /// Hand the selection to the job form, which closes this window.
    pub fn assign(&mut self, form: &mut JobContactsForm) -> Result<(), AssignError> {
        let mut target = form.target(self.role);
        self.screen
            .assign(&mut self.window, &mut target as &mut dyn AssignmentTarget)
    }

    pub fn render(&mut self, ctx: &egui::Context, enabled: bool) -> Option<AssignDialogRequest> {
        let mut request = None;
        let mut open = self.window.is_open();

        egui::Window::new(self.window.title().to_string())
            .collapsible(false)
            .resizable(true)
            .default_width(560.0)
            .enabled(enabled)
            .open(&mut open)
            .show(ctx, |ui| {
                self.render_filters(ui);
                ui.separator();
                self.render_available(ui);

                ui.horizontal(|ui| {
                    let label = match self.screen.mode() {
                        AssignMode::Multiple => "Select Contacts",
                        AssignMode::Single => "Assign Contact",
                    };
                    if ui.button(label).clicked() {
                        request = self.select_checked();
                    }
                    if ui.button("Cancel").clicked() {
                        self.window.close();
                    }
                });

                if self.screen.mode() == AssignMode::Multiple {
                    ui.separator();
                    ui.strong("Selected Contacts");
                    self.render_selected(ui);
                    if ui.button("Assign Selected Contacts").clicked() {
                        request = Some(AssignDialogRequest::ConfirmAssign);
                    }
                }
            });

        if !open {
            self.window.close();
        }
        request
    }

    fn render_filters(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("contact_filter_field")
                .selected_text(self.filter_field.label())
                .show_ui(ui, |ui| {
                    for field in ContactField::ALL {
                        ui.selectable_value(&mut self.filter_field, field, field.label());
                    }
                });

            let response = ui.text_edit_singleline(&mut self.criteria);
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Filter").clicked() || submitted {
                self.screen.filter_by_field(self.filter_field, &self.criteria);
            }
        });

        ui.horizontal_wrapped(|ui| {
            for letter in 'A'..='Z' {
                if ui.small_button(letter.to_string()).clicked() {
                    self.screen.filter_by_letter(letter);
                }
            }
            if ui.small_button("All").clicked() {
                self.criteria.clear();
                self.screen.show_all();
            }
        });
    }

    fn render_available(&mut self, ui: &mut egui::Ui) {
        let rows: Vec<Contact> = self.screen.visible().into_iter().cloned().collect();
        if rows.is_empty() {
            ui.weak("No matching contacts.");
            return;
        }

        let single = self.screen.mode() == AssignMode::Single;
        let checked = &mut self.checked;
        ui.push_id("available_contacts", |ui| {
            contact_table(ui, &rows, |ui, contact| {
                if single {
                    if ui.radio(checked.contains(&contact.id), "").clicked() {
                        checked.clear();
                        checked.insert(contact.id);
                    }
                } else {
                    let mut ticked = checked.contains(&contact.id);
                    if ui.checkbox(&mut ticked, "").changed() {
                        if ticked {
                            checked.insert(contact.id);
                        } else {
                            checked.remove(&contact.id);
                        }
                    }
                }
            });
        });
    }

    fn render_selected(&mut self, ui: &mut egui::Ui) {
        let rows: Vec<Contact> = self.screen.selected().into_iter().cloned().collect();
        if rows.is_empty() {
            ui.weak("No contacts selected yet.");
            return;
        }

        let mut deselect = None;
        ui.push_id("selected_contacts", |ui| {
            contact_table(ui, &rows, |ui, contact| {
                if ui.small_button("✖").on_hover_text("Deselect Contact").clicked() {
                    deselect = Some(contact.id);
                }
            });
        });
        if let Some(id) = deselect {
            self.screen.deselect(id);
        }
    }
}

/// Name, company and position columns after a leading control column.
fn contact_table(
    ui: &mut egui::Ui,
    rows: &[Contact],
    mut control: impl FnMut(&mut egui::Ui, &Contact),
) {
    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(220.0)
        .column(Column::exact(24.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|_| {});
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Company");
            });
            header.col(|ui| {
                ui.strong("Position");
            });
        })
        .body(|mut body| {
            for contact in rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| control(ui, contact));
                    row.col(|ui| {
                        ui.label(contact.listing_name());
                    });
                    row.col(|ui| {
                        ui.label(contact.company_name.as_str());
                    });
                    row.col(|ui| {
                        ui.label(contact.position.as_str());
                    });
                });
            }
        });
}
