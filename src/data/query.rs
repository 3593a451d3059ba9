use serde::Serialize;

use super::error::{QueryError, QueryResult};
use super::model::DepartmentRow;

// ---------------------------------------------------------------------------
// Year comparison
// ---------------------------------------------------------------------------

/// Value of the second year and its change from the first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearComparison {
    pub value: f64,
    pub delta: f64,
}

/// Compare `year_b` against `year_a` for one department.
pub fn compare_years(
    row: &DepartmentRow<'_>,
    year_a: &str,
    year_b: &str,
) -> QueryResult<YearComparison> {
    let a = row.value_at(year_a)?;
    let b = row.value_at(year_b)?;
    Ok(YearComparison {
        value: b,
        delta: b - a,
    })
}

// ---------------------------------------------------------------------------
// Summary over a year span
// ---------------------------------------------------------------------------

/// Extremes and total of a department's budget over some years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub max_year: String,
    pub min_year: String,
    pub total: f64,
}

/// Summarize `row` over `years`.
///
/// Ties on the extremes go to the leftmost year in `years`. Any non-numeric
/// cell fails the whole summary.
pub fn summarize<'y, I>(row: &DepartmentRow<'_>, years: I) -> QueryResult<Summary>
where
    I: IntoIterator<Item = &'y str>,
{
    let mut max: Option<(&str, f64)> = None;
    let mut min: Option<(&str, f64)> = None;
    let mut total = 0.0;

    for year in years {
        let v = row.value_at(year)?;
        total += v;
        if max.map_or(true, |(_, m)| v > m) {
            max = Some((year, v));
        }
        if min.map_or(true, |(_, m)| v < m) {
            min = Some((year, v));
        }
    }

    match (max, min) {
        (Some((max_year, _)), Some((min_year, _))) => Ok(Summary {
            max_year: max_year.to_string(),
            min_year: min_year.to_string(),
            total,
        }),
        _ => Err(QueryError::EmptySpan),
    }
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

/// `(year, value)` for every year in header order, as charts consume it.
pub fn series<'a>(row: &DepartmentRow<'a>) -> QueryResult<Vec<(&'a str, f64)>> {
    row.years()
        .iter()
        .map(|year| row.value_at(year).map(|v| (year, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::ingest;
    use crate::data::model::BudgetTable;

    fn table(csv: &str) -> BudgetTable {
        ingest(csv.as_bytes()).unwrap()
    }

    #[test]
    fn summarize_picks_extremes_and_total() {
        let t = table("Department,2020,2021,2022\nHealth,10,30,20\n");
        let row = t.row("Health").unwrap();
        let s = summarize(&row, t.years.iter()).unwrap();
        assert_eq!(s.max_year, "2021");
        assert_eq!(s.min_year, "2020");
        assert_eq!(s.total, 60.0);
    }

    #[test]
    fn summarize_ties_resolve_leftmost() {
        let t = table("Department,2020,2021,2022\nHealth,30,30,10\nRoads,5,1,1\n");
        let s = summarize(&t.row("Health").unwrap(), t.years.iter()).unwrap();
        assert_eq!(s.max_year, "2020");
        assert_eq!(s.min_year, "2022");

        let s = summarize(&t.row("Roads").unwrap(), t.years.iter()).unwrap();
        assert_eq!(s.min_year, "2021");
    }

    #[test]
    fn summarize_respects_span_subset_and_order() {
        let t = table("Department,2020,2021,2022\nHealth,10,30,30\n");
        let row = t.row("Health").unwrap();
        let s = summarize(&row, ["2022", "2021"]).unwrap();
        assert_eq!(s.max_year, "2022");
        assert_eq!(s.total, 60.0);
    }

    #[test]
    fn summarize_fails_on_any_bad_cell() {
        let t = table("Department,2020,2021\nHealth,10,\n");
        let err = summarize(&t.row("Health").unwrap(), t.years.iter()).unwrap_err();
        assert!(matches!(err, QueryError::Conversion { .. }));
    }

    #[test]
    fn summarize_empty_span() {
        let t = table("Department,2020\nHealth,10\n");
        let err = summarize(&t.row("Health").unwrap(), std::iter::empty()).unwrap_err();
        assert_eq!(err, QueryError::EmptySpan);
    }

    #[test]
    fn summarize_unknown_year_in_span() {
        let t = table("Department,2020\nHealth,10\n");
        let err = summarize(&t.row("Health").unwrap(), ["2020", "1999"]).unwrap_err();
        assert_eq!(err, QueryError::YearNotFound("1999".into()));
    }

    #[test]
    fn compare_reports_second_value_and_delta() {
        let t = table("Department,2020,2021\nHealth,10,30\n");
        let row = t.row("Health").unwrap();
        let c = compare_years(&row, "2020", "2021").unwrap();
        assert_eq!(
            c,
            YearComparison {
                value: 30.0,
                delta: 20.0
            }
        );

        let c = compare_years(&row, "2021", "2020").unwrap();
        assert_eq!(c.delta, -20.0);
    }

    #[test]
    fn compare_propagates_lookup_errors() {
        let t = table("Department,2020,2021\nHealth,10,x\n");
        let row = t.row("Health").unwrap();
        assert_eq!(
            compare_years(&row, "2020", "2099").unwrap_err(),
            QueryError::YearNotFound("2099".into())
        );
        assert!(matches!(
            compare_years(&row, "2020", "2021").unwrap_err(),
            QueryError::Conversion { .. }
        ));
    }

    #[test]
    fn repeated_year_columns_all_count() {
        let t = table("Department,2020,2020\nHealth,1,5\n");
        let row = t.row("Health").unwrap();

        let s = series(&row).unwrap();
        assert_eq!(s, vec![("2020", 1.0), ("2020.1", 5.0)]);

        let summary = summarize(&row, t.years.iter()).unwrap();
        assert_eq!(summary.total, 6.0);
        assert_eq!(summary.max_year, "2020.1");
    }

    #[test]
    fn series_keeps_header_order() {
        let t = table("Department,2022,2020\nHealth,7.5,2\n");
        let s = series(&t.row("Health").unwrap()).unwrap();
        assert_eq!(s, vec![("2022", 7.5), ("2020", 2.0)]);
    }
}
