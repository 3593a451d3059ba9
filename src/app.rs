use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::{AppState, Section};
use crate::ui::{panels, plot, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BudgetDashboardApp {
    pub state: AppState,
}

impl BudgetDashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for BudgetDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::handle_dropped_files(ctx, &mut self.state);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected section ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.section {
            Section::Home => views::home(ui),
            Section::DataOverview => views::data_overview(ui, &self.state),
            Section::Analysis => views::analysis(ui, &mut self.state),
            Section::Graphs => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| plot::graphs(ui, &mut self.state));
            }
        });
    }
}
