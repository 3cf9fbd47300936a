//! Claims Dashboard Adapter
//!
//! A thin stand-in for the presentation layer. [`DashboardSession`] holds the
//! session's claim store and the current query; each query change re-runs the
//! filter and produces fresh rows. Payor actions on a row go through the
//! session's decision handler.
//!
//! # Example
//!
//! ```
//! use domain_claims::{seed::session_claims, ClaimStore};
//! use interface_dashboard::DashboardSession;
//!
//! let store = ClaimStore::from_records(session_claims()).unwrap();
//! let mut session = DashboardSession::new(store);
//! session.set_search_term("jane");
//! assert_eq!(session.view().rows.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod view;

use std::path::Path;

use domain_claims::{
    seed::session_claims, ClaimCommand, ClaimQuery, ClaimRecord, ClaimStore, ClaimSummary,
    DecisionLog, DecisionRecord, PriorityFilter,
};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::view::{ClaimRow, DashboardView};

/// Loads the session's claims, from a JSON file when one is configured
pub fn load_store(config: &DashboardConfig) -> Result<ClaimStore, DashboardError> {
    match &config.claims_path {
        Some(path) => load_store_from_path(path),
        None => {
            tracing::info!("Using built-in mock claims");
            Ok(ClaimStore::from_records(session_claims())?)
        }
    }
}

/// Loads claims from a JSON array on disk
pub fn load_store_from_path(path: impl AsRef<Path>) -> Result<ClaimStore, DashboardError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let store = ClaimStore::from_json(&json)?;
    tracing::info!(path = %path.display(), count = store.len(), "Loaded claims");
    Ok(store)
}

/// Dashboard state for one session
#[derive(Debug)]
pub struct DashboardSession {
    store: ClaimStore,
    query: ClaimQuery,
    decisions: DecisionLog,
}

impl DashboardSession {
    pub fn new(store: ClaimStore) -> Self {
        Self {
            store,
            query: ClaimQuery::all(),
            decisions: DecisionLog::new(),
        }
    }

    /// Creates a session with the query taken from configuration
    pub fn from_config(store: ClaimStore, config: &DashboardConfig) -> Self {
        let mut session = Self::new(store);
        session.set_priority_filter(&config.priority_filter);
        session.set_search_term(config.search_term.clone());
        session
    }

    pub fn query(&self) -> &ClaimQuery {
        &self.query
    }

    pub fn store(&self) -> &ClaimStore {
        &self.store
    }

    pub fn decisions(&self) -> &DecisionLog {
        &self.decisions
    }

    /// Handles a change of the priority filter control
    pub fn set_priority_filter(&mut self, value: &str) {
        self.query.priority_filter = PriorityFilter::parse_lenient(value);
        tracing::debug!(priority = ?self.query.priority_filter, "Priority filter changed");
    }

    /// Handles a change of the search box
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        tracing::debug!(search = %self.query.search_term, "Search term changed");
    }

    /// Returns the records matching the current query
    pub fn visible(&self) -> Vec<&ClaimRecord> {
        self.store.query(&self.query)
    }

    /// Builds the rows and summary for the current query
    pub fn view(&self) -> DashboardView {
        let visible = self.visible();
        DashboardView {
            rows: visible.iter().map(|record| ClaimRow::from(*record)).collect(),
            summary: ClaimSummary::from_records(visible),
        }
    }

    /// Applies a payor action to one claim
    pub fn act(
        &mut self,
        claim_id: &str,
        command: ClaimCommand,
    ) -> Result<DecisionRecord, DashboardError> {
        Ok(self.decisions.decide(&self.store, claim_id, command)?)
    }
}
