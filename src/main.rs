mod analysis;
mod app;
mod color;
mod config;
mod data;
mod i18n;
mod state;
mod stats;
mod theme;
mod ui;

use app::SurveyDashboardApp;
use config::Settings;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = Settings::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size(settings.min_window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    log::info!("Starting survey dashboard");
    eframe::run_native(
        "Survey Analysis ✨",
        options,
        Box::new(|cc| Ok(Box::new(SurveyDashboardApp::new(cc, AppState::new(settings))))),
    )
}
