use std::path::Path;

use crate::config::DashboardConfig;
use crate::data::error::{IngestError, QueryResult};
use crate::data::loader;
use crate::data::model::{BudgetTable, DepartmentRow};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    DataOverview,
    Analysis,
    Graphs,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::DataOverview,
        Section::Analysis,
        Section::Graphs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::DataOverview => "Data Overview",
            Section::Analysis => "Analysis",
            Section::Graphs => "Graphs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    #[default]
    YearWise,
    CompareYears,
}

impl AnalysisMode {
    pub fn label(self) -> &'static str {
        match self {
            AnalysisMode::YearWise => "Year-wise Budget",
            AnalysisMode::CompareYears => "Compare Two Years",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (None until the user loads a file).
    pub dataset: Option<BudgetTable>,

    /// File name the dataset came from.
    pub source_name: Option<String>,

    pub section: Section,

    /// Department picked in Analysis / Graphs.
    pub department: Option<String>,

    pub mode: AnalysisMode,

    /// Years picked for "Compare Two Years".
    pub year_a: Option<String>,
    pub year_b: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            dataset: None,
            source_name: None,
            section: Section::default(),
            department: None,
            mode: AnalysisMode::default(),
            year_a: None,
            year_b: None,
            status_message: None,
        }
    }

    /// Replace the dataset and reset selections to its first department/year.
    pub fn set_dataset(&mut self, name: String, dataset: BudgetTable) {
        self.department = dataset.departments().first().map(|d| d.to_string());
        let first_year = dataset.years.first().map(str::to_string);
        self.year_a = first_year.clone();
        self.year_b = first_year;

        self.dataset = Some(dataset);
        self.source_name = Some(name);
        self.status_message = None;
    }

    /// Ingest uploaded bytes. On failure the previous dataset and selections
    /// stay as they were.
    pub fn ingest_upload(&mut self, name: &str, bytes: &[u8]) -> Result<(), IngestError> {
        match loader::ingest(bytes) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {name}: {} rows, {} year columns",
                    dataset.len(),
                    dataset.years.len()
                );
                self.set_dataset(name.to_string(), dataset);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load {name}: {e}");
                self.status_message = Some(format!(
                    "Could not read CSV. Please upload a valid file. ({e})"
                ));
                Err(e)
            }
        }
    }

    /// Load a file from disk, same replace-on-success rule as uploads.
    pub fn open_path(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {}: {} rows, {} year columns",
                    path.display(),
                    dataset.len(),
                    dataset.years.len()
                );
                self.set_dataset(name, dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Row of the selected department, `None` when nothing is loaded or
    /// selected.
    pub fn selected_row(&self) -> Option<QueryResult<DepartmentRow<'_>>> {
        let dataset = self.dataset.as_ref()?;
        let department = self.department.as_deref()?;
        Some(dataset.row(department))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::QueryError;

    const FIRST: &[u8] = b"Department,2020,2021\nHealth,10,30\nRoads,5,6\n";

    #[test]
    fn upload_selects_first_department_and_year() {
        let mut state = AppState::default();
        state.ingest_upload("budget.csv", FIRST).unwrap();

        assert_eq!(state.department.as_deref(), Some("Health"));
        assert_eq!(state.year_a.as_deref(), Some("2020"));
        assert_eq!(state.year_b.as_deref(), Some("2020"));
        assert_eq!(state.source_name.as_deref(), Some("budget.csv"));
    }

    #[test]
    fn malformed_upload_keeps_previous_dataset() {
        let mut state = AppState::default();
        state.ingest_upload("good.csv", FIRST).unwrap();
        state.department = Some("Roads".into());
        let before = state.dataset.clone();

        let err = state.ingest_upload("bad.csv", b"Department,2020\nHealth,1,2\n");
        assert!(err.is_err());
        assert_eq!(state.dataset, before);
        assert_eq!(state.department.as_deref(), Some("Roads"));
        assert_eq!(state.source_name.as_deref(), Some("good.csv"));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn second_upload_replaces_wholesale() {
        let mut state = AppState::default();
        state.ingest_upload("a.csv", FIRST).unwrap();
        state.ingest_upload("b.csv", b"Dept,2030\nParks,1\n").unwrap();

        let ds = state.dataset.as_ref().unwrap();
        assert_eq!(ds.departments(), vec!["Parks"]);
        assert_eq!(state.department.as_deref(), Some("Parks"));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn stale_selection_is_reported_not_panicked() {
        let mut state = AppState::default();
        assert!(state.selected_row().is_none());

        state.ingest_upload("a.csv", FIRST).unwrap();
        state.department = Some("Gone".into());
        assert!(matches!(
            state.selected_row(),
            Some(Err(QueryError::DepartmentNotFound(_)))
        ));
    }

    #[test]
    fn open_path_failure_sets_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.open_path(&dir.path().join("missing.csv"));
        assert!(state.dataset.is_none());
        assert!(state.status_message.unwrap().contains("missing.csv"));
    }
}
