//! Row view models for the claims table

use serde::Serialize;

use domain_claims::{ClaimRecord, ClaimSummary};

use crate::config::OutputFormat;
use crate::error::DashboardError;

/// One rendered row of the claims table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRow {
    pub id: String,
    pub patient: String,
    pub provider: String,
    pub network: &'static str,
    pub diagnosis: String,
    pub amount: String,
    pub submitted: String,
    pub priority: &'static str,
    pub pre_auth: &'static str,
}

impl From<&ClaimRecord> for ClaimRow {
    fn from(record: &ClaimRecord) -> Self {
        Self {
            id: record.id.to_string(),
            patient: record.patient.name.clone(),
            provider: record.provider.name.clone(),
            network: record.provider.network.as_str(),
            diagnosis: record.claim.diagnosis.clone(),
            amount: record.claim.amount.clone(),
            submitted: record.claim.submitted_date.clone(),
            priority: record.claim.priority.label(),
            pre_auth: record.coverage.pre_auth.as_str(),
        }
    }
}

/// The table shown for the current query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub rows: Vec<ClaimRow>,
    pub summary: ClaimSummary,
}

impl DashboardView {
    /// Renders the view in the configured output format
    pub fn render(&self, format: OutputFormat) -> Result<String, DashboardError> {
        match format {
            OutputFormat::Table => Ok(self.to_table()),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Renders the view as fixed-width text lines
    pub fn to_table(&self) -> String {
        let mut out = format!(
            "{:<14} {:<20} {:<26} {:<15} {:>12}  {:<16}\n",
            "CLAIM", "PATIENT", "PROVIDER", "NETWORK", "AMOUNT", "PRIORITY"
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{:<14} {:<20} {:<26} {:<15} {:>12}  {:<16}\n",
                row.id, row.patient, row.provider, row.network, row.amount, row.priority
            ));
        }
        out.push_str(&format!(
            "{} claims ({} high, {} medium, {} low), total {}\n",
            self.summary.total,
            self.summary.by_priority.high,
            self.summary.by_priority.medium,
            self.summary.by_priority.low,
            self.summary.total_amount.to_display_string(),
        ));
        out
    }
}
