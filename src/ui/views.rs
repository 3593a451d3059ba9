use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color;
use crate::data::model::BudgetTable;
use crate::data::query::compare_years;
use crate::data::stats::describe;
use crate::format;
use crate::state::{AnalysisMode, AppState};

pub(crate) fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(24.0).color(color::accent()));
    ui.add_space(8.0);
}

pub(crate) fn warn(ui: &mut Ui, text: impl Into<String>) {
    ui.label(RichText::new(text.into()).color(Color32::from_rgb(200, 120, 0)));
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub fn home(ui: &mut Ui) {
    ui.label(
        RichText::new("Budget Analysis Dashboard")
            .size(36.0)
            .strong()
            .color(color::accent()),
    );
    ui.add_space(12.0);
    ui.label("Welcome to the Budget Analysis Dashboard.");
    ui.label(RichText::new("Upload a CSV file from the sidebar to start.").strong());

    ui.add_space(12.0);
    ui.heading("Your CSV must include");
    ui.label("• A Department column first");
    ui.label("• One column per year (e.g. 2014 … 2025) holding numeric budgets");

    ui.add_space(12.0);
    ui.heading("Dashboard Features");
    for feature in [
        "Data preview",
        "Summary statistics",
        "Department-level analysis",
        "Yearly comparisons",
        "Bar & line charts",
    ] {
        ui.label(format!("• {feature}"));
    }
}

// ---------------------------------------------------------------------------
// Data Overview
// ---------------------------------------------------------------------------

pub fn data_overview(ui: &mut Ui, state: &AppState) {
    section_header(ui, "Dataset Overview");

    let Some(dataset) = &state.dataset else {
        warn(ui, "Please upload a CSV file.");
        return;
    };
    if dataset.is_empty() {
        warn(ui, "The uploaded file has a header but no rows.");
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Preview");
            ui.push_id("preview", |ui: &mut Ui| {
                preview_table(ui, dataset, state.config.preview_rows);
            });

            ui.add_space(16.0);
            ui.heading("Statistics");
            ui.push_id("statistics", |ui: &mut Ui| {
                statistics_table(ui, dataset, state.config.total_decimals);
            });
        });
}

fn preview_table(ui: &mut Ui, dataset: &BudgetTable, rows: usize) {
    let head = dataset.head(rows);
    let n_cols = dataset.years.len() + 1;

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .columns(Column::auto().at_least(60.0), n_cols)
            .header(20.0, |mut header| {
                for name in dataset.column_names() {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for record in head {
                    body.row(18.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.label(&record.department);
                        });
                        for i in 0..dataset.years.len() {
                            let raw = record.cells.get(i).map(String::as_str).unwrap_or("");
                            row.col(|ui: &mut Ui| {
                                ui.label(raw);
                            });
                        }
                    });
                }
            });
    });
}

fn statistics_table(ui: &mut Ui, dataset: &BudgetTable, decimals: usize) {
    let stats = describe(dataset);
    if stats.is_empty() {
        ui.label("No numeric columns to describe.");
        return;
    }

    if ui.small_button("Copy as JSON").clicked() {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => ui.ctx().copy_text(json),
            Err(e) => log::error!("Failed to serialize statistics: {e}"),
        }
    }

    const ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(50.0))
            .columns(Column::auto().at_least(70.0), stats.len())
            .header(20.0, |mut header| {
                header.col(|_ui: &mut Ui| {});
                for s in &stats {
                    header.col(|ui: &mut Ui| {
                        ui.strong(&s.column);
                    });
                }
            })
            .body(|mut body| {
                for (r, label) in ROWS.iter().enumerate() {
                    body.row(18.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.strong(*label);
                        });
                        for s in &stats {
                            let text = match r {
                                0 => s.count.to_string(),
                                1 => format::thousands(s.mean, decimals),
                                2 => s
                                    .std
                                    .map(|v| format::thousands(v, decimals))
                                    .unwrap_or_else(|| "NaN".to_string()),
                                3 => format::thousands(s.min, decimals),
                                4 => format::thousands(s.q25, decimals),
                                5 => format::thousands(s.median, decimals),
                                6 => format::thousands(s.q75, decimals),
                                _ => format::thousands(s.max, decimals),
                            };
                            row.col(|ui: &mut Ui| {
                                ui.label(text);
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

pub fn analysis(ui: &mut Ui, state: &mut AppState) {
    section_header(ui, "Data Analysis");

    if state.dataset.is_none() {
        warn(ui, "Upload a CSV file to continue.");
        return;
    }

    ui.columns(2, |cols| {
        department_picker(&mut cols[0], state, "analysis_department");
        cols[1].label("Analysis Type");
        egui::ComboBox::from_id_salt("analysis_mode")
            .selected_text(state.mode.label())
            .show_ui(&mut cols[1], |ui: &mut Ui| {
                for mode in [AnalysisMode::YearWise, AnalysisMode::CompareYears] {
                    ui.selectable_value(&mut state.mode, mode, mode.label());
                }
            });
    });
    ui.separator();

    match state.mode {
        AnalysisMode::YearWise => year_wise(ui, state),
        AnalysisMode::CompareYears => compare(ui, state),
    }
}

/// Department selector shared by Analysis and Graphs.
pub(crate) fn department_picker(ui: &mut Ui, state: &mut AppState, id: &str) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    ui.label("Select Department");
    let current = state.department.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt(id)
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for dept in dataset.departments() {
                if ui.selectable_label(current == dept, dept).clicked() {
                    state.department = Some(dept.to_string());
                }
            }
        });
}

fn year_picker(
    ui: &mut Ui,
    id: &str,
    label: &str,
    years: &[String],
    selected: &mut Option<String>,
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_deref().unwrap_or_default())
        .show_ui(ui, |ui: &mut Ui| {
            for year in years {
                let is_selected = selected.as_deref() == Some(year.as_str());
                if ui.selectable_label(is_selected, year).clicked() {
                    *selected = Some(year.clone());
                }
            }
        });
}

fn year_wise(ui: &mut Ui, state: &AppState) {
    let row = match state.selected_row() {
        Some(Ok(row)) => row,
        Some(Err(e)) => return warn(ui, e.to_string()),
        None => return,
    };

    ui.heading(format!("Budget for {}", row.department()));
    egui::Grid::new("year_wise")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.strong(state.dataset.as_ref().map_or("Department", |d| d.label_header.as_str()));
            ui.label(row.department());
            ui.end_row();
            for (year, raw) in row.raw_cells() {
                ui.strong(year);
                ui.label(format::cell(raw, state.config.total_decimals));
                ui.end_row();
            }
        });
}

fn compare(ui: &mut Ui, state: &mut AppState) {
    let years = match &state.dataset {
        Some(ds) => ds.years.labels().to_vec(),
        None => return,
    };

    ui.columns(2, |cols| {
        year_picker(&mut cols[0], "first_year", "First Year", &years, &mut state.year_a);
        year_picker(&mut cols[1], "second_year", "Second Year", &years, &mut state.year_b);
    });
    ui.add_space(8.0);

    let (Some(year_a), Some(year_b)) = (state.year_a.as_deref(), state.year_b.as_deref()) else {
        return warn(ui, "Select two years to compare.");
    };
    let row = match state.selected_row() {
        Some(Ok(row)) => row,
        Some(Err(e)) => return warn(ui, e.to_string()),
        None => return,
    };

    match compare_years(&row, year_a, year_b) {
        Ok(c) => {
            let decimals = state.config.total_decimals;
            ui.label(format!("{} ({year_b})", row.department()));
            ui.label(RichText::new(format::thousands(c.value, decimals)).size(32.0).strong());
            ui.label(
                RichText::new(format!("{} vs {year_a}", format::signed(c.delta, decimals)))
                    .color(color::delta_color(c.delta)),
            );
        }
        Err(e) => warn(ui, e.to_string()),
    }
}
