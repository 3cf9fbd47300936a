//! Dashboard error handling

use domain_claims::{DecisionError, ValidationError};
use thiserror::Error;

/// Dashboard error types
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Could not read claims from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid claim data: {0}")]
    Validation(#[from] ValidationError),

    #[error("Decision rejected: {0}")]
    Decision(#[from] DecisionError),

    #[error("Could not render output: {0}")]
    Render(#[from] serde_json::Error),
}
