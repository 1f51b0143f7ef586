use super::confirm::{ConfirmAction, ConfirmDialogState};
use super::contacts_dialog::{AssignContactsDialog, AssignDialogRequest};
use super::date_picker::render_date_field;
use super::sample_data;
use super::select_widgets::render_select;
use crate::models::contact::Contact;
use crate::models::select_option::{SelectList, SelectOption};
use crate::models::settings::{AssignMode, Settings};
use crate::services::calendar::{BindingRegistry, FieldValues};
use crate::services::cascade::{CascadeOptions, CascadingSelect, SelectStore};
use crate::services::contacts::{JobContactRole, JobContactsForm};
use egui::RichText;
use std::cell::RefCell;
use std::rc::Rc;

const START_DATE_FIELD: &str = "id_start_date";
const END_DATE_FIELD: &str = "id_end_date";
const START_DATE_TRIGGER: &str = "start_date_calendar";
const END_DATE_TRIGGER: &str = "end_date_calendar";

const CLIENT_SELECT: &str = "id_client";
const JOB_SELECT: &str = "id_job";
const TASK_SELECT: &str = "id_task";

/// The job edit screen.
pub struct OfficeApp {
    settings: Settings,
    date_fields: BindingRegistry,
    selects: SelectStore,
    /// Client → job, with job → task hanging off it
    cascade: CascadingSelect,
    job_contacts: JobContactsForm,
    /// Contacts offered by the assignment popups
    contacts: Vec<Contact>,
    assign_dialog: Option<AssignContactsDialog>,
    confirm_dialog: ConfirmDialogState,
}

impl eframe::App for OfficeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let blocked = self.confirm_dialog.is_open();
        let form_enabled = !blocked && self.assign_dialog.is_none();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(form_enabled, |ui| self.render_job_form(ui));
        });

        self.render_assign_dialog(ctx, !blocked);
        self.handle_confirm_dialog(ctx);
    }
}

impl OfficeApp {
    pub fn new(settings: Settings) -> Self {
        let fields = Rc::new(RefCell::new(FieldValues::new()));
        let mut date_fields = BindingRegistry::new(fields);
        date_fields.bind(START_DATE_TRIGGER, START_DATE_FIELD);
        date_fields.bind(END_DATE_TRIGGER, END_DATE_FIELD);

        let mut selects = SelectStore::new();
        let placeholder = || SelectOption::placeholder(settings.placeholder_text.clone());
        let mut clients = vec![placeholder()];
        clients.extend(
            sample_data::clients()
                .into_iter()
                .map(|(text, value)| SelectOption::new(text, value)),
        );
        selects.insert(CLIENT_SELECT, SelectList::new(clients));
        selects.insert(JOB_SELECT, SelectList::new(vec![placeholder()]));
        selects.insert(TASK_SELECT, SelectList::new(vec![placeholder()]));

        let options = CascadeOptions {
            update_on_create: settings.update_on_create,
        };
        let mut cascade =
            CascadingSelect::new(CLIENT_SELECT, JOB_SELECT, sample_data::client_jobs(), options)
                .with_placeholder(settings.placeholder_text.clone());
        cascade.add_dependent(
            CascadingSelect::new(JOB_SELECT, TASK_SELECT, sample_data::job_tasks(), options)
                .with_placeholder(settings.placeholder_text.clone()),
        );
        cascade.initialize(&mut selects);

        Self {
            settings,
            date_fields,
            selects,
            cascade,
            job_contacts: JobContactsForm::new(),
            contacts: sample_data::contacts(),
            assign_dialog: None,
            confirm_dialog: ConfirmDialogState::new(),
        }
    }

    fn render_job_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Edit Job");
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.strong("Schedule");
            render_date_field(ui, "Start date", &mut self.date_fields, START_DATE_TRIGGER);
            render_date_field(ui, "End date", &mut self.date_fields, END_DATE_TRIGGER);
        });

        ui.add_space(8.0);
        ui.group(|ui| {
            ui.strong("Work");
            let lists = [("Client", CLIENT_SELECT), ("Job", JOB_SELECT), ("Task", TASK_SELECT)];
            for (label, list_id) in lists {
                if render_select(ui, label, &mut self.selects, list_id) {
                    self.cascade.handle_change(&mut self.selects, list_id);
                }
            }
        });

        ui.add_space(8.0);
        ui.group(|ui| {
            ui.strong("Contacts");
            self.render_contact_slots(ui);
        });
    }

    fn render_contact_slots(&mut self, ui: &mut egui::Ui) {
        let mut open_role = None;

        ui.horizontal(|ui| {
            ui.label("Job contacts");
            if ui.button("Assign Contacts…").clicked() {
                open_role = Some(JobContactRole::JobContacts);
            }
        });
        if self.job_contacts.job_contacts.is_empty() {
            ui.weak("None assigned");
        }
        for (option, selected) in &mut self.job_contacts.job_contacts {
            ui.checkbox(selected, option.text.as_str());
        }

        for (label, role) in [
            ("Primary contact", JobContactRole::Primary),
            ("Billing contact", JobContactRole::Billing),
        ] {
            let slot = match role {
                JobContactRole::Billing => &self.job_contacts.billing_contact,
                _ => &self.job_contacts.primary_contact,
            };
            let display = if slot.display.is_empty() {
                RichText::new("None").weak()
            } else {
                RichText::new(slot.display.as_str())
            };
            ui.horizontal(|ui| {
                ui.label(format!("{}:", label));
                ui.label(display);
                if ui.small_button("Assign…").clicked() {
                    open_role = Some(role);
                }
            });
        }

        if let Some(role) = open_role {
            let mode = match role {
                JobContactRole::JobContacts => self.settings.assign_mode,
                JobContactRole::Primary | JobContactRole::Billing => AssignMode::Single,
            };
            log::debug!("Opening contact assignment for {:?} ({:?})", role, mode);
            self.assign_dialog = Some(AssignContactsDialog::new(self.contacts.clone(), role, mode));
        }
    }

    fn render_assign_dialog(&mut self, ctx: &egui::Context, enabled: bool) {
        let Some(dialog) = self.assign_dialog.as_mut() else {
            return;
        };

        match dialog.render(ctx, enabled) {
            Some(AssignDialogRequest::Alert(error)) => {
                self.confirm_dialog.request(ConfirmAction::Alert(error));
            }
            Some(AssignDialogRequest::ConfirmAssign) => {
                self.confirm_dialog.request(ConfirmAction::AssignContacts {
                    prompt: dialog.prompt(),
                });
            }
            None => {}
        }

        if !dialog.is_open() {
            self.assign_dialog = None;
        }
    }

    /// Handle the confirmation dialog rendering and process confirmed actions
    fn handle_confirm_dialog(&mut self, ctx: &egui::Context) {
        self.confirm_dialog.render(ctx);

        let Some(action) = self.confirm_dialog.take_confirmed() else {
            return;
        };
        match action {
            ConfirmAction::AssignContacts { .. } => {
                let Some(dialog) = self.assign_dialog.as_mut() else {
                    return;
                };
                match dialog.assign(&mut self.job_contacts) {
                    Ok(()) => log::info!("Contacts assigned as {:?}", dialog.role()),
                    Err(e) => {
                        log::warn!("Assignment failed: {}", e);
                        self.confirm_dialog.request(ConfirmAction::Alert(e));
                    }
                }
                if !dialog.is_open() {
                    self.assign_dialog = None;
                }
            }
            ConfirmAction::Alert(_) => {}
        }
    }
}
