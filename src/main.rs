// Office Widgets
// Main entry point

use office_widgets::services::settings::SettingsService;
use office_widgets::ui_egui::OfficeApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Office Widgets");

    let settings = SettingsService::from_default_location().load_or_default();
    let size = [settings.window_width, settings.window_height];

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size([320.0, 240.0])
            .with_title("Job Administration"),
        ..Default::default()
    };

    eframe::run_native(
        "Job Administration",
        options,
        Box::new(|_cc| Ok(Box::new(OfficeApp::new(settings)))),
    )
}
