use serde::Serialize;

use super::model::{coerce_cell, BudgetTable};

// ---------------------------------------------------------------------------
// Descriptive statistics per numeric column
// ---------------------------------------------------------------------------

/// count / mean / std / min / quartiles / max of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Statistics for every column whose non-blank cells all coerce to numbers.
///
/// Blank cells are missing values: they lower `count` but do not exclude the
/// column. The department column is included when its labels happen to be
/// numeric. Columns with any text cell, and columns with no values at all,
/// are left out.
pub fn describe(table: &BudgetTable) -> Vec<ColumnStats> {
    let labels = column_stats(
        &table.label_header,
        table.records.iter().map(|r| r.department.as_str()),
    );

    let years = table.years.iter().enumerate().filter_map(|(i, year)| {
        column_stats(
            year,
            table
                .records
                .iter()
                .map(move |r| r.cells.get(i).map(String::as_str).unwrap_or("")),
        )
    });

    labels.into_iter().chain(years).collect()
}

fn column_stats<'a>(column: &str, cells: impl Iterator<Item = &'a str>) -> Option<ColumnStats> {
    let mut values = cells
        .filter(|c| !c.trim().is_empty())
        .map(|c| coerce_cell(c).ok())
        .collect::<Option<Vec<f64>>>()?;
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = (n > 1).then(|| {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    Some(ColumnStats {
        column: column.to_string(),
        count: n,
        mean,
        std,
        min: values[0],
        q25: percentile(&values, 0.25),
        median: percentile(&values, 0.5),
        q75: percentile(&values, 0.75),
        max: values[n - 1],
    })
}

/// Linear interpolation between closest ranks over sorted, non-empty `sorted`.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
