use std::collections::HashSet;

use super::error::{ConversionError, QueryError, QueryResult};

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

/// Coerce a raw CSV cell to `f64`.
///
/// Surrounding whitespace is ignored. Blank cells, text and non-finite
/// values (`NaN`, `inf`) are rejected.
pub fn coerce_cell(raw: &str) -> Result<f64, ConversionError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConversionError {
            raw: raw.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// YearSpan – ordered year labels from the header
// ---------------------------------------------------------------------------

/// Year column labels in header order. Never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearSpan(Vec<String>);

impl YearSpan {
    pub fn new(labels: Vec<String>) -> Self {
        YearSpan(labels)
    }

    /// Column position of `year` within the span.
    pub fn position(&self, year: &str) -> Option<usize> {
        self.0.iter().position(|y| y == year)
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// BudgetRecord – one row as read from the file
// ---------------------------------------------------------------------------

/// One CSV row: department label plus raw year cells.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRecord {
    pub department: String,
    /// One raw cell per year, same order as [`YearSpan`].
    pub cells: Vec<String>,
}

// ---------------------------------------------------------------------------
// BudgetTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// An ingested budget CSV. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTable {
    /// Header of the first column, usually "Department".
    pub label_header: String,
    pub years: YearSpan,
    pub records: Vec<BudgetRecord>,
}

impl BudgetTable {
    pub fn new(label_header: String, years: YearSpan, records: Vec<BudgetRecord>) -> Self {
        BudgetTable {
            label_header,
            years,
            records,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct department labels in first-occurrence order.
    pub fn departments(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.department.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }

    /// Row for `department`; the first one in file order if the label repeats.
    pub fn row(&self, department: &str) -> QueryResult<DepartmentRow<'_>> {
        self.records
            .iter()
            .find(|r| r.department == department)
            .map(|record| DepartmentRow {
                record,
                years: &self.years,
            })
            .ok_or_else(|| QueryError::DepartmentNotFound(department.to_string()))
    }

    /// The first `n` rows, for previews.
    pub fn head(&self, n: usize) -> &[BudgetRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Header labels of every column, department column first.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label_header.as_str()).chain(self.years.iter())
    }
}

// ---------------------------------------------------------------------------
// DepartmentRow – borrowed view over one record
// ---------------------------------------------------------------------------

/// A single department's values, addressable by year label.
#[derive(Debug, Clone, Copy)]
pub struct DepartmentRow<'a> {
    record: &'a BudgetRecord,
    years: &'a YearSpan,
}

impl<'a> DepartmentRow<'a> {
    pub fn department(&self) -> &'a str {
        &self.record.department
    }

    pub fn years(&self) -> &'a YearSpan {
        self.years
    }

    /// Raw, uncoerced cell for `year`.
    pub fn raw(&self, year: &str) -> QueryResult<&'a str> {
        let idx = self
            .years
            .position(year)
            .ok_or_else(|| QueryError::YearNotFound(year.to_string()))?;
        Ok(self.record.cells.get(idx).map(String::as_str).unwrap_or(""))
    }

    /// `(year, raw cell)` pairs in header order.
    pub fn raw_cells(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let cells = &self.record.cells;
        self.years
            .iter()
            .enumerate()
            .map(move |(i, y)| (y, cells.get(i).map(String::as_str).unwrap_or("")))
    }

    /// Numeric value for `year`.
    pub fn value_at(&self, year: &str) -> QueryResult<f64> {
        let raw = self.raw(year)?;
        coerce_cell(raw).map_err(|source| QueryError::Conversion {
            department: self.department().to_string(),
            year: year.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BudgetTable {
        BudgetTable::new(
            "Department".into(),
            YearSpan::new(vec!["2020".into(), "2021".into()]),
            vec![
                BudgetRecord {
                    department: "Health".into(),
                    cells: vec!["10".into(), " 30 ".into()],
                },
                BudgetRecord {
                    department: "Roads".into(),
                    cells: vec!["".into(), "n/a".into()],
                },
                BudgetRecord {
                    department: "Health".into(),
                    cells: vec!["99".into(), "99".into()],
                },
            ],
        )
    }

    #[test]
    fn coerce_accepts_padded_numbers() {
        assert_eq!(coerce_cell(" 12.5 "), Ok(12.5));
        assert_eq!(coerce_cell("-3"), Ok(-3.0));
        assert_eq!(coerce_cell("1e3"), Ok(1000.0));
    }

    #[test]
    fn coerce_rejects_blank_text_and_non_finite() {
        for raw in ["", "   ", "abc", "1,000", "NaN", "inf"] {
            let err = coerce_cell(raw).unwrap_err();
            assert_eq!(err.raw, raw);
        }
    }

    #[test]
    fn departments_are_unique_in_first_occurrence_order() {
        assert_eq!(table().departments(), vec!["Health", "Roads"]);
    }

    #[test]
    fn duplicate_label_resolves_to_first_row() {
        let t = table();
        let row = t.row("Health").unwrap();
        assert_eq!(row.value_at("2020"), Ok(10.0));
        assert_eq!(row.value_at("2021"), Ok(30.0));
    }

    #[test]
    fn unknown_department_is_not_found() {
        assert_eq!(
            table().row("NoSuchDept").unwrap_err(),
            QueryError::DepartmentNotFound("NoSuchDept".into())
        );
    }

    #[test]
    fn unknown_year_is_distinct_from_conversion_failure() {
        let t = table();
        let health = t.row("Health").unwrap();
        assert_eq!(
            health.value_at("2099"),
            Err(QueryError::YearNotFound("2099".into()))
        );

        let roads = t.row("Roads").unwrap();
        assert!(matches!(
            roads.value_at("2021"),
            Err(QueryError::Conversion { ref year, .. }) if year == "2021"
        ));
    }

    #[test]
    fn head_clamps_to_row_count() {
        let t = table();
        assert_eq!(t.head(2).len(), 2);
        assert_eq!(t.head(50).len(), 3);
    }

    #[test]
    fn column_names_start_with_label_header() {
        let t = table();
        let names: Vec<&str> = t.column_names().collect();
        assert_eq!(names, vec!["Department", "2020", "2021"]);
    }
}
