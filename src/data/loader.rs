use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use super::error::IngestError;
use super::model::{BudgetRecord, BudgetTable, YearSpan};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a budget CSV from disk. The file is read fully before parsing.
pub fn load_file(path: &Path) -> Result<BudgetTable> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let table = ingest(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(table)
}

/// Parse raw CSV bytes into a [`BudgetTable`].
///
/// CSV layout: header row, first column the department label, every other
/// column a year. Cells are stored as text; nothing is coerced here, so a
/// non-numeric cell only fails the queries that touch it.
///
/// A repeated header is renamed `2020.1`, `2020.2`, ... so every column
/// stays addressable by label.
///
/// Rows with a different field count than the header, invalid UTF-8 and a
/// missing header row are all rejected.
pub fn ingest(bytes: &[u8]) -> Result<BudgetTable, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let mut columns = unique_headers(headers.iter()).into_iter();
    let label_header = columns.next().ok_or(IngestError::MissingHeader)?;
    let years = YearSpan::new(columns.collect());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut fields = record.iter();
        let department = fields.next().unwrap_or_default().to_string();
        let cells = fields.map(str::to_string).collect();
        records.push(BudgetRecord { department, cells });
    }

    log::debug!(
        "ingested {} rows, label column '{}', {} year columns",
        records.len(),
        label_header,
        years.len()
    );

    Ok(BudgetTable::new(label_header, years, records))
}

fn unique_headers<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut used = HashSet::new();
    names
        .map(|name| {
            let mut candidate = name.to_string();
            let mut n = 1;
            while used.contains(&candidate) {
                candidate = format!("{name}.{n}");
                n += 1;
            }
            used.insert(candidate.clone());
            candidate
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const BUDGET: &str = "Department,2020,2021,2022\n\
                          Health,10,30,20\n\
                          Education,5,5,7\n\
                          Health,1,1,1\n";

    #[test]
    fn ingest_reads_header_and_rows() {
        let t = ingest(BUDGET.as_bytes()).unwrap();
        assert_eq!(t.label_header, "Department");
        assert_eq!(t.years.labels(), ["2020", "2021", "2022"]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.records[1].department, "Education");
        assert_eq!(t.records[1].cells, ["5", "5", "7"]);
    }

    #[test]
    fn year_order_follows_header_not_chronology() {
        let t = ingest(b"Dept,2022,2019,2021\nA,1,2,3\n").unwrap();
        assert_eq!(t.years.labels(), ["2022", "2019", "2021"]);
    }

    #[test]
    fn repeated_year_headers_are_renamed() {
        let t = ingest(b"Department,2020,2020,2020.1,2020\nHealth,1,5,7,9\n").unwrap();
        assert_eq!(t.years.labels(), ["2020", "2020.1", "2020.1.1", "2020.2"]);

        let row = t.row("Health").unwrap();
        assert_eq!(row.value_at("2020"), Ok(1.0));
        assert_eq!(row.value_at("2020.1"), Ok(5.0));
        assert_eq!(row.value_at("2020.2"), Ok(9.0));
    }

    #[test]
    fn non_numeric_cells_are_accepted_at_ingest() {
        let t = ingest(b"Department,2020\nHealth,\nRoads,unknown\n").unwrap();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = ingest(b"Department,2020\nHealth,1,2,3\n").unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = ingest(&[0xff, 0xfe, b',', 0x00, b'\n', 0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, IngestError::Csv(_)));
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = ingest(b"").unwrap_err();
        assert!(matches!(err, IngestError::MissingHeader));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUDGET.as_bytes()).unwrap();

        let t = load_file(file.path()).unwrap();
        assert_eq!(t.departments(), vec!["Health", "Education"]);
    }

    #[test]
    fn load_file_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
    }
}
