// Slotweek Application
// Main entry point

use slotweek::services::settings::SettingsService;
use slotweek::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Slotweek");

    let settings = SettingsService::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Slotweek"),
        ..Default::default()
    };

    eframe::run_native(
        "Slotweek",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings)))),
    )
}
