mod app;
mod color;
mod config;
mod data;
mod format;
mod state;
mod ui;

use app::BudgetDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Budget Analysis Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(BudgetDashboardApp::new(config)))),
    )
}
