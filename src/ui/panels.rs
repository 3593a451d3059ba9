use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::state::{AppState, Section};

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(RichText::new("Navigation").color(color::accent()));
    ui.separator();

    ui.label("Go to:");
    for section in Section::ALL {
        ui.radio_value(&mut state.section, section, section.label());
    }

    ui.add_space(12.0);
    ui.separator();
    ui.strong("Budget CSV");
    if ui.button("Upload…").clicked() {
        open_file_dialog(state);
    }
    match &state.source_name {
        Some(name) => ui.label(RichText::new(name).monospace()),
        None => ui.weak("Drop a .csv file here or use Upload."),
    };
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} departments, {} years",
                ds.departments().len(),
                ds.years.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File input
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload Budget CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

/// Ingest any files dropped onto the window. The last one wins.
pub fn handle_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    for file in dropped {
        if let Some(bytes) = &file.bytes {
            let name = if file.name.is_empty() {
                "dropped.csv".to_string()
            } else {
                file.name.clone()
            };
            if let Err(e) = state.ingest_upload(&name, bytes) {
                log::warn!("Dropped file {name} was not loaded: {e}");
            }
        } else if let Some(path) = &file.path {
            state.open_path(path);
        }
    }
}
