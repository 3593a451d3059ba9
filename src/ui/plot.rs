use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color;
use crate::data::query::{series, summarize};
use crate::format;
use crate::state::AppState;
use crate::ui::views::{department_picker, section_header, warn};

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Graphs section (central panel)
// ---------------------------------------------------------------------------

/// Bar and line charts of the selected department plus its summary.
pub fn graphs(ui: &mut Ui, state: &mut AppState) {
    section_header(ui, "Visualisations");

    if state.dataset.is_none() {
        warn(ui, "Upload a CSV file to generate charts.");
        return;
    }
    department_picker(ui, state, "graphs_department");
    ui.separator();

    let row = match state.selected_row() {
        Some(Ok(row)) => row,
        Some(Err(e)) => return warn(ui, e.to_string()),
        None => return,
    };
    if row.years().is_empty() {
        return warn(ui, "The dataset has no year columns to chart.");
    }
    let points = match series(&row) {
        Ok(points) => points,
        Err(e) => return warn(ui, format!("Cannot chart {}: {e}", row.department())),
    };
    let labels: Vec<String> = points.iter().map(|(y, _)| y.to_string()).collect();

    ui.label(RichText::new("Bar Chart").size(18.0).color(color::accent()));
    bar_chart(ui, &points, labels.clone());

    ui.add_space(8.0);
    ui.label(RichText::new("Line Chart").size(18.0).color(color::accent()));
    line_chart(ui, &points, labels);

    ui.add_space(8.0);
    match summarize(&row, row.years().iter()) {
        Ok(s) => {
            ui.label(RichText::new(format!("Highest Budget: {}", s.max_year)).strong());
            ui.label(RichText::new(format!("Lowest Budget: {}", s.min_year)).strong());
            ui.label(
                RichText::new(format!(
                    "Total Budget: {} {}",
                    format::thousands(s.total, state.config.total_decimals),
                    state.config.currency_unit
                ))
                .strong(),
            );
            if ui.button("Copy summary as JSON").clicked() {
                match serde_json::to_string_pretty(&s) {
                    Ok(json) => ui.ctx().copy_text(json),
                    Err(e) => log::error!("Failed to serialize summary: {e}"),
                }
            }
        }
        Err(e) => warn(ui, e.to_string()),
    }
}

/// Year labels at integer positions, nothing in between.
fn year_axis(labels: Vec<String>) -> impl Fn(GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let v = mark.value;
        if v.fract() != 0.0 || v < 0.0 {
            return String::new();
        }
        labels.get(v as usize).cloned().unwrap_or_default()
    }
}

fn bar_chart(ui: &mut Ui, points: &[(&str, f64)], labels: Vec<String>) {
    let shades = color::bar_shades(points.len());
    let bars: Vec<Bar> = points
        .iter()
        .zip(shades)
        .enumerate()
        .map(|(i, ((year, value), shade))| {
            Bar::new(i as f64, *value)
                .name(*year)
                .fill(shade)
                .width(0.7)
        })
        .collect();

    Plot::new("budget_bar_chart")
        .height(CHART_HEIGHT)
        .x_axis_formatter(year_axis(labels))
        .y_axis_label("Budget")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Budget"));
        });
}

fn line_chart(ui: &mut Ui, points: &[(&str, f64)], labels: Vec<String>) {
    let raw: Vec<[f64; 2]> = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| [i as f64, *v])
        .collect();

    let line_points: PlotPoints = raw.iter().copied().collect();
    let marker_points: PlotPoints = raw.iter().copied().collect();

    Plot::new("budget_line_chart")
        .height(CHART_HEIGHT)
        .x_axis_formatter(year_axis(labels))
        .y_axis_label("Budget")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(line_points).color(color::accent()).width(2.0));
            plot_ui.points(
                Points::new(marker_points)
                    .color(color::accent())
                    .filled(true)
                    .radius(4.0)
                    .shape(MarkerShape::Circle)
                    .name("Budget"),
            );
        });
}
