//! Blocking confirmation and alert dialogs.
//!
//! While a dialog is pending the rest of the UI is disabled, so the user has
//! to answer before doing anything else.

use crate::services::contacts::AssignError;
use egui::{Context, RichText};

/// What the dialog is asking about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Hand the picked contacts to the job form
    AssignContacts { prompt: &'static str },
    /// A problem the user has to acknowledge
    Alert(AssignError),
}

impl ConfirmAction {
    /// Get the dialog title for this action
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::AssignContacts { .. } => "Assign Contacts",
            ConfirmAction::Alert(_) => "Contacts",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::AssignContacts { prompt } => prompt.to_string(),
            ConfirmAction::Alert(error) => error.to_string(),
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::AssignContacts { .. } => "Assign",
            ConfirmAction::Alert(_) => "OK",
        }
    }

    /// Alerts only offer an acknowledgement button
    pub fn is_alert(&self) -> bool {
        matches!(self, ConfirmAction::Alert(_))
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// User confirmed the action
    Confirmed,
    /// User cancelled the action
    Cancelled,
    /// Dialog is still open
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
    /// Action the user confirmed, waiting to be taken by the caller
    confirmed_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request confirmation for an action
    pub fn request(&mut self, action: ConfirmAction) {
        log::debug!("Requesting confirmation: {:?}", action);
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    pub fn pending_action(&self) -> Option<&ConfirmAction> {
        self.pending_action.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending_action = None;
    }

    /// Resolve the pending dialog as if its buttons were pressed.
    pub fn resolve(&mut self, result: ConfirmResult) {
        match result {
            ConfirmResult::Confirmed => self.confirmed_action = self.pending_action.take(),
            ConfirmResult::Cancelled => self.pending_action = None,
            ConfirmResult::Pending => {}
        }
    }

    /// Take the action the user confirmed, if any.
    pub fn take_confirmed(&mut self) -> Option<ConfirmAction> {
        self.confirmed_action.take()
    }

    /// Render the dialog and return the result
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);
                ui.add_space(10.0);

                if action.is_alert() {
                    ui.horizontal(|ui| {
                        let warning = egui::Color32::from_rgb(220, 150, 50);
                        ui.label(RichText::new("⚠").size(24.0).color(warning));
                        ui.label(action.message());
                    });
                } else {
                    ui.label(action.message());
                }

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(action.confirm_text()).clicked() {
                            result = ConfirmResult::Confirmed;
                        }
                        if !action.is_alert() {
                            ui.add_space(10.0);
                            if ui.button("Cancel").clicked() {
                                result = ConfirmResult::Cancelled;
                            }
                        }
                    });
                });
                ui.add_space(5.0);
            });

        // Escape dismisses an alert and cancels a question
        if result == ConfirmResult::Pending && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = if action.is_alert() {
                ConfirmResult::Confirmed
            } else {
                ConfirmResult::Cancelled
            };
        }

        self.resolve(result);
        result
    }
}
