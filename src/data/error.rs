use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy for the data layer
// ---------------------------------------------------------------------------

/// The uploaded bytes could not be turned into a [`BudgetTable`].
///
/// Fatal to the current upload only; whatever dataset the session held
/// before stays in place.
///
/// [`BudgetTable`]: super::model::BudgetTable
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV has no header row")]
    MissingHeader,
}

/// A cell that was expected to be numeric is not.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("'{raw}' is not a number")]
pub struct ConversionError {
    /// The offending cell text, untrimmed.
    pub raw: String,
}

/// Failure of a query against a loaded dataset.
///
/// None of these invalidate the dataset: they are reported per query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("department '{0}' not found")]
    DepartmentNotFound(String),

    #[error("year '{0}' is not a column of this dataset")]
    YearNotFound(String),

    #[error("{department} / {year}: {source}")]
    Conversion {
        department: String,
        year: String,
        #[source]
        source: ConversionError,
    },

    #[error("no years to summarize")]
    EmptySpan,
}

pub type QueryResult<T> = Result<T, QueryError>;
