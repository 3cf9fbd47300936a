//! Dashboard configuration

use serde::Deserialize;

use crate::error::DashboardError;

/// How filtered rows are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// JSON file holding the session's claims; the built-in mock session is used when unset
    pub claims_path: Option<String>,
    /// Initial priority filter (all, low, medium, high)
    pub priority_filter: String,
    /// Initial search term
    pub search_term: String,
    /// Output format
    pub output: OutputFormat,
    /// Log level
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            claims_path: None,
            priority_filter: "all".to_string(),
            search_term: String::new(),
            output: OutputFormat::Table,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from `DASHBOARD_*` environment variables
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_source(config::Environment::with_prefix("DASHBOARD"))
    }

    /// Loads configuration from a single source. A value that does not fit
    /// its field fails the whole load.
    pub fn from_source<S>(source: S) -> Result<Self, DashboardError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let loaded = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(loaded)
    }
}
