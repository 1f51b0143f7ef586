use crate::services::cascade::SelectStore;

/// Render `list_id` from `store` as a combo box. Returns `true` when the user
/// picked a different option this frame.
pub fn render_select(
    ui: &mut egui::Ui,
    label: &str,
    store: &mut SelectStore,
    list_id: &str,
) -> bool {
    let Some(list) = store.get_mut(list_id) else {
        log::warn!("Select list {} not found", list_id);
        return false;
    };

    let before = list.selected_index().unwrap_or(0);
    let mut index = before;
    let selected_text = list
        .selected()
        .map(|option| option.text.clone())
        .unwrap_or_default();

    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_source(list_id)
            .selected_text(selected_text)
            .width(200.0)
            .show_ui(ui, |ui| {
                for (i, option) in list.options().iter().enumerate() {
                    ui.selectable_value(&mut index, i, option.text.as_str());
                }
            });
    });

    index != before && list.select_index(index)
}
