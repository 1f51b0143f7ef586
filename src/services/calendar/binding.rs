//! Binding trigger controls to date fields.
//!
//! Clicking a trigger opens a picker seeded from its target field, and the
//! picked date is written back into that field.

use super::controller::CalendarController;
use crate::models::calendar::{AnchorPosition, CalendarCommand};
use chrono::{Local, NaiveDate};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Text values of form fields, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).map(String::as_str)
    }

    pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) {
        self.values.insert(field_id.to_string(), value.into());
    }

    /// Mutable access for text inputs, creating an empty value on first use.
    pub fn entry(&mut self, field_id: &str) -> &mut String {
        self.values.entry(field_id.to_string()).or_default()
    }
}

/// Field values shared with picker callbacks on the UI thread.
pub type SharedFields = Rc<RefCell<FieldValues>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    trigger_id: String,
    target_field_id: String,
}

impl FieldBinding {
    pub fn new(trigger_id: impl Into<String>, target_field_id: impl Into<String>) -> Self {
        Self {
            trigger_id: trigger_id.into(),
            target_field_id: target_field_id.into(),
        }
    }

    pub fn trigger_id(&self) -> &str {
        &self.trigger_id
    }

    pub fn target_field_id(&self) -> &str {
        &self.target_field_id
    }

    /// Open `controller` at `anchor`, seeded from the target field.
    pub fn trigger(
        &self,
        controller: &mut CalendarController,
        fields: &SharedFields,
        anchor: AnchorPosition,
    ) {
        self.trigger_at(controller, fields, anchor, Local::now().date_naive());
    }

    pub fn trigger_at(
        &self,
        controller: &mut CalendarController,
        fields: &SharedFields,
        anchor: AnchorPosition,
        today: NaiveDate,
    ) {
        let seed = fields
            .borrow()
            .value(&self.target_field_id)
            .unwrap_or_default()
            .to_string();

        let sink = Rc::clone(fields);
        let target = self.target_field_id.clone();
        controller.open_at(anchor, &seed, today, move |date: &str| {
            sink.borrow_mut().set_value(&target, date);
        });
    }
}

/// A binding together with the picker it owns.
#[derive(Debug)]
pub struct BoundPicker {
    pub binding: FieldBinding,
    pub controller: CalendarController,
}

/// The date fields on a screen, each with its own picker.
#[derive(Debug)]
pub struct BindingRegistry {
    fields: SharedFields,
    pickers: Vec<BoundPicker>,
}

impl BindingRegistry {
    pub fn new(fields: SharedFields) -> Self {
        Self {
            fields,
            pickers: Vec::new(),
        }
    }

    pub fn fields(&self) -> &SharedFields {
        &self.fields
    }

    /// Register `trigger_id` to open a picker for `target_field_id`. Binding
    /// the same trigger again replaces the earlier target.
    pub fn bind(&mut self, trigger_id: impl Into<String>, target_field_id: impl Into<String>) {
        let binding = FieldBinding::new(trigger_id, target_field_id);
        self.pickers.retain(|picker| picker.binding.trigger_id != binding.trigger_id);
        log::debug!(
            "Bound date trigger {} to field {}",
            binding.trigger_id,
            binding.target_field_id
        );
        self.pickers.push(BoundPicker {
            binding,
            controller: CalendarController::new(),
        });
    }

    /// Handle a click on a trigger. Returns `false` for an unknown trigger.
    pub fn handle_click(&mut self, trigger_id: &str, anchor: AnchorPosition) -> bool {
        self.handle_click_at(trigger_id, anchor, Local::now().date_naive())
    }

    pub fn handle_click_at(
        &mut self,
        trigger_id: &str,
        anchor: AnchorPosition,
        today: NaiveDate,
    ) -> bool {
        let fields = Rc::clone(&self.fields);
        match self.picker_mut(trigger_id) {
            Some(picker) => {
                picker
                    .binding
                    .trigger_at(&mut picker.controller, &fields, anchor, today);
                true
            }
            None => {
                log::warn!("No date field bound to trigger {}", trigger_id);
                false
            }
        }
    }

    /// Forward a picker click to the picker owned by `trigger_id`.
    pub fn dispatch(&mut self, trigger_id: &str, command: CalendarCommand) -> Option<String> {
        self.picker_mut(trigger_id)
            .and_then(|picker| picker.controller.dispatch(command))
    }

    pub fn picker(&self, trigger_id: &str) -> Option<&BoundPicker> {
        self.pickers
            .iter()
            .find(|picker| picker.binding.trigger_id == trigger_id)
    }

    pub fn picker_mut(&mut self, trigger_id: &str) -> Option<&mut BoundPicker> {
        self.pickers
            .iter_mut()
            .find(|picker| picker.binding.trigger_id == trigger_id)
    }

    pub fn pickers(&self) -> &[BoundPicker] {
        &self.pickers
    }
}
