//! Payor decisions on claims
//!
//! The dashboards offer Approve, Reject and Request Info actions on each
//! claim row. [`ClaimCommand`] names those actions and [`DecisionHandler`] is
//! the seam where a real adjudication backend plugs in. Decisions never modify
//! a [`ClaimRecord`]; they are recorded alongside it.
//!
//! [`DecisionLog`] is the in-memory handler used by the dashboard session.
//! Once a claim is approved or rejected, that decision is final.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ClaimNumber;
use crate::claim::ClaimRecord;
use crate::error::DecisionError;
use crate::store::ClaimStore;

/// An action a payor takes on a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClaimCommand {
    Approve,
    Reject { reason: Option<String> },
    RequestInfo { note: Option<String> },
}

impl ClaimCommand {
    /// Returns the status a claim ends up in after this command
    pub fn resulting_status(&self) -> DecisionStatus {
        match self {
            ClaimCommand::Approve => DecisionStatus::Approved,
            ClaimCommand::Reject { .. } => DecisionStatus::Rejected,
            ClaimCommand::RequestInfo { .. } => DecisionStatus::InformationRequested,
        }
    }
}

/// Decision status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Approved,
    Rejected,
    InformationRequested,
}

impl DecisionStatus {
    /// Approved and rejected claims accept no further commands
    pub fn is_final(&self) -> bool {
        matches!(self, DecisionStatus::Approved | DecisionStatus::Rejected)
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DecisionStatus::Approved => "approved",
            DecisionStatus::Rejected => "rejected",
            DecisionStatus::InformationRequested => "awaiting information",
        };
        f.write_str(text)
    }
}

/// One recorded decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub claim_id: ClaimNumber,
    pub command: ClaimCommand,
    pub status: DecisionStatus,
    pub decided_at: DateTime<Utc>,
}

/// Handles payor commands for claims
pub trait DecisionHandler {
    /// Applies a command to a claim, returning what was recorded
    fn handle(
        &mut self,
        claim: &ClaimRecord,
        command: ClaimCommand,
    ) -> Result<DecisionRecord, DecisionError>;
}

/// Append-only, in-memory decision ledger
#[derive(Debug, Clone, Default)]
pub struct DecisionLog {
    entries: Vec<DecisionRecord>,
    latest: HashMap<ClaimNumber, usize>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a claim up in the store and applies the command to it
    pub fn decide(
        &mut self,
        store: &ClaimStore,
        claim_id: &str,
        command: ClaimCommand,
    ) -> Result<DecisionRecord, DecisionError> {
        let claim = store
            .get(claim_id)
            .ok_or_else(|| DecisionError::ClaimNotFound(claim_id.to_string()))?;
        self.handle(claim, command)
    }

    /// Returns the most recent decision for a claim
    pub fn latest(&self, claim_id: &ClaimNumber) -> Option<&DecisionRecord> {
        self.latest.get(claim_id).map(|&i| &self.entries[i])
    }

    /// Returns the current status of a claim, if any command was recorded
    pub fn status_of(&self, claim_id: &ClaimNumber) -> Option<DecisionStatus> {
        self.latest(claim_id).map(|entry| entry.status)
    }

    /// Returns every decision recorded for a claim, oldest first
    pub fn history<'a>(
        &'a self,
        claim_id: &'a ClaimNumber,
    ) -> impl Iterator<Item = &'a DecisionRecord> + 'a {
        self.entries.iter().filter(move |entry| &entry.claim_id == claim_id)
    }

    /// Returns the claims whose latest decision has the given status
    pub fn with_status(&self, status: DecisionStatus) -> Vec<&ClaimNumber> {
        let mut ids: Vec<&ClaimNumber> = self
            .latest
            .iter()
            .filter(|(_, &i)| self.entries[i].status == status)
            .map(|(id, _)| id)
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DecisionHandler for DecisionLog {
    fn handle(
        &mut self,
        claim: &ClaimRecord,
        command: ClaimCommand,
    ) -> Result<DecisionRecord, DecisionError> {
        if let Some(current) = self.status_of(&claim.id) {
            if current.is_final() {
                tracing::warn!(claim_id = %claim.id, status = %current, "Claim already decided");
                return Err(DecisionError::AlreadyFinal {
                    claim_id: claim.id.to_string(),
                    status: current.to_string(),
                });
            }
        }

        let entry = DecisionRecord {
            claim_id: claim.id.clone(),
            status: command.resulting_status(),
            command,
            decided_at: Utc::now(),
        };

        tracing::info!(claim_id = %entry.claim_id, status = %entry.status, "Recorded claim decision");

        self.latest.insert(entry.claim_id.clone(), self.entries.len());
        self.entries.push(entry.clone());
        Ok(entry)
    }
}
