use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "BUDGET_DASHBOARD_CONFIG";

/// Dashboard display settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Rows shown in the Data Overview preview.
    pub preview_rows: usize,
    /// Unit appended to budget totals.
    pub currency_unit: String,
    /// Decimal places for totals, deltas and statistics.
    pub total_decimals: usize,
    /// Initial window size in points.
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            currency_unit: "crores".to_string(),
            total_decimals: 2,
            window_size: [1200.0, 800.0],
        }
    }
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load from [`CONFIG_ENV`] if set, falling back to defaults on any error.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::from_file(Path::new(&path)) {
            Ok(cfg) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                cfg
            }
            Err(e) => {
                log::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "preview_rows": 10 }}"#).unwrap();

        let cfg = DashboardConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.preview_rows, 10);
        assert_eq!(cfg.currency_unit, "crores");
        assert_eq!(cfg.total_decimals, 2);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "preview_rows = 10").unwrap();

        assert!(DashboardConfig::from_file(file.path()).is_err());
    }
}
