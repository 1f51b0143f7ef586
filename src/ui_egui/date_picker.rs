//! Date fields with a popup calendar.
//!
//! Each field has a 📅 trigger. Clicking it opens the field's own picker
//! anchored under the trigger; clicks inside the picker are collected as
//! [`CalendarCommand`]s and dispatched once the frame's drawing is done.

use crate::models::calendar::{AnchorPosition, CalendarCommand};
use crate::services::calendar::{
    BindingRegistry, CalendarController, CalendarView, GridCell, MonthList,
};
use crate::utils::date::is_valid_uk_date;
use egui::{Color32, RichText};
use std::rc::Rc;

/// Render a labelled date field bound to `trigger_id`, plus its picker when
/// open.
pub fn render_date_field(
    ui: &mut egui::Ui,
    label: &str,
    registry: &mut BindingRegistry,
    trigger_id: &str,
) {
    let Some(target) = registry
        .picker(trigger_id)
        .map(|picker| picker.binding.target_field_id().to_string())
    else {
        return;
    };
    let fields = Rc::clone(registry.fields());
    let mut just_opened = false;

    ui.horizontal(|ui| {
        ui.label(label);
        {
            let mut values = fields.borrow_mut();
            ui.add(
                egui::TextEdit::singleline(values.entry(&target))
                    .hint_text("dd/mm/yyyy")
                    .desired_width(100.0),
            );
        }

        let response = ui.small_button("📅").on_hover_text("Choose a date");
        if response.clicked() {
            let anchor = response.rect.left_bottom();
            let anchor = AnchorPosition::new(anchor.x, anchor.y);
            just_opened = registry.handle_click(trigger_id, anchor);
        }

        let values = fields.borrow();
        let text = values.value(&target).unwrap_or_default();
        if !text.is_empty() && !is_valid_uk_date(text) {
            ui.label(
                RichText::new("Enter a date as dd/mm/yyyy")
                    .small()
                    .color(Color32::from_rgb(200, 60, 60)),
            );
        }
    });

    if let Some(picker) = registry.picker_mut(trigger_id) {
        let commands = render_picker_popup(ui.ctx(), trigger_id, &picker.controller, just_opened);
        for command in commands {
            picker.controller.dispatch(command);
        }
    }
}

/// Draw an open picker and return the clicks made on it this frame.
pub fn render_picker_popup(
    ctx: &egui::Context,
    id_source: &str,
    controller: &CalendarController,
    just_opened: bool,
) -> Vec<CalendarCommand> {
    let Some(view) = controller.render() else {
        return Vec::new();
    };
    let anchor = controller.anchor();
    let mut commands = Vec::new();

    let area = egui::Area::new(egui::Id::new(("date_picker", id_source)))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(anchor.x, anchor.y))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(220.0);
                ui.add_enabled_ui(view.active, |ui| {
                    render_month_controls(ui, &view, &mut commands);
                    ui.separator();
                    render_day_grid(ui, id_source, &view, &mut commands);
                    ui.separator();
                    render_year_controls(ui, &view, &mut commands);
                });
            });
        });

    match &view.month_list {
        Some(list) => {
            let rect = area.response.rect;
            let pos = egui::pos2(rect.left() + 24.0, rect.top() + 16.0);
            render_month_list(ctx, id_source, list, pos, &mut commands);
        }
        None => {
            if !just_opened && area.response.clicked_elsewhere() {
                commands.push(CalendarCommand::Dismiss);
            }
        }
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        commands.push(if view.month_list.is_some() {
            CalendarCommand::CloseMonthList
        } else {
            CalendarCommand::Dismiss
        });
    }

    commands
}

/// Previous month, month name (opens the month list), next month.
fn render_month_controls(
    ui: &mut egui::Ui,
    view: &CalendarView,
    commands: &mut Vec<CalendarCommand>,
) {
    ui.horizontal(|ui| {
        if ui
            .small_button("◀")
            .on_hover_text("Previous month")
            .clicked()
        {
            commands.push(CalendarCommand::PreviousMonth);
        }

        if ui
            .selectable_label(false, RichText::new(view.header.month_name).strong())
            .on_hover_text("Jump to another month")
            .clicked()
        {
            commands.push(CalendarCommand::OpenMonthList);
        }

        if ui.small_button("▶").on_hover_text("Next month").clicked() {
            commands.push(CalendarCommand::NextMonth);
        }
    });
}

fn render_day_grid(
    ui: &mut egui::Ui,
    id_source: &str,
    view: &CalendarView,
    commands: &mut Vec<CalendarCommand>,
) {
    egui::Grid::new(("date_picker_grid", id_source))
        .num_columns(7)
        .spacing([4.0, 2.0])
        .min_col_width(24.0)
        .show(ui, |ui| {
            for name in &view.day_headers {
                ui.label(RichText::new(*name).small().strong());
            }
            ui.end_row();

            for row in view.grid.rows() {
                for cell in row {
                    match cell {
                        GridCell::Blank => {
                            ui.label(RichText::new("-").weak());
                        }
                        GridCell::Day { day, selected } => {
                            if ui.selectable_label(*selected, day.to_string()).clicked() {
                                commands.push(CalendarCommand::SelectDay(*day));
                            }
                        }
                    }
                }
                ui.end_row();
            }
        });
}

/// Previous year, current year, next year.
fn render_year_controls(
    ui: &mut egui::Ui,
    view: &CalendarView,
    commands: &mut Vec<CalendarCommand>,
) {
    ui.horizontal(|ui| {
        if ui
            .small_button(view.header.previous_year.to_string())
            .on_hover_text("Previous year")
            .clicked()
        {
            commands.push(CalendarCommand::PreviousYear);
        }
        ui.label(RichText::new(format!(" {} ", view.header.year)).strong());
        if ui
            .small_button(view.header.next_year.to_string())
            .on_hover_text("Next year")
            .clicked()
        {
            commands.push(CalendarCommand::NextYear);
        }
    });
}

fn render_month_list(
    ctx: &egui::Context,
    id_source: &str,
    list: &MonthList,
    pos: egui::Pos2,
    commands: &mut Vec<CalendarCommand>,
) {
    let area = egui::Area::new(egui::Id::new(("date_picker_months", id_source)))
        .order(egui::Order::Tooltip)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(140.0);
                for entry in list.entries() {
                    if ui.selectable_label(entry.current, entry.label.as_str()).clicked() {
                        commands.push(CalendarCommand::PickMonth {
                            year: entry.year,
                            month: entry.month,
                        });
                    }
                }
            });
        });

    if commands.is_empty() && area.response.clicked_elsewhere() {
        commands.push(CalendarCommand::CloseMonthList);
    }
}
