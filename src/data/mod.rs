/// Data layer: budget table, loading, queries and statistics.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → BudgetTable (cells kept as text)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ BudgetTable  │  records, YearSpan, row lookup by department
///   └─────────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  query    │   │  stats    │  compare / summarize / series, describe
///   └──────────┘   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod stats;
