//! Session claim store
//!
//! Holds the validated, ordered claim records for one dashboard session. The
//! store is built once and never mutated afterwards; it is cheap to clone and
//! safe to share between threads.

use std::collections::HashMap;
use std::sync::Arc;

use crate::claim::{ClaimRecord, ClaimRecordDraft};
use crate::error::ValidationError;
use crate::query::{filter, ClaimQuery};

/// Immutable, ordered collection of claim records
#[derive(Debug, Clone, Default)]
pub struct ClaimStore {
    records: Arc<Vec<ClaimRecord>>,
    index: Arc<HashMap<String, usize>>,
}

impl ClaimStore {
    /// Builds a store from typed records.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateId` if two records share an id, or
    /// `ValidationError::InvalidField` if a patient or provider field is invalid.
    pub fn from_records(records: Vec<ClaimRecord>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if let Err(err) = record.validate_fields() {
                tracing::warn!(claim_id = %record.id, error = %err, "Rejected claim record");
                return Err(err);
            }
            if index.insert(record.id.to_string(), position).is_some() {
                tracing::warn!(claim_id = %record.id, "Rejected duplicate claim id");
                return Err(ValidationError::DuplicateId(record.id.to_string()));
            }
        }

        tracing::debug!(count = records.len(), "Claim store loaded");

        Ok(Self {
            records: Arc::new(records),
            index: Arc::new(index),
        })
    }

    /// Builds a store from drafts whose enum fields are still text
    pub fn from_drafts(drafts: Vec<ClaimRecordDraft>) -> Result<Self, ValidationError> {
        let records = drafts
            .into_iter()
            .map(|draft| {
                let id = draft.id.clone();
                draft.into_record().inspect_err(|err| {
                    tracing::warn!(claim_id = %id, error = %err, "Rejected claim record");
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_records(records)
    }

    /// Builds a store from a JSON array of claim records
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let drafts: Vec<ClaimRecordDraft> = serde_json::from_str(json)?;
        Self::from_drafts(drafts)
    }

    /// Returns the records in session order
    pub fn records(&self) -> &[ClaimRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClaimRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by claim id
    pub fn get(&self, id: &str) -> Option<&ClaimRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Runs a dashboard query over the whole store
    pub fn query(&self, query: &ClaimQuery) -> Vec<&ClaimRecord> {
        filter(self.records.iter(), query)
    }
}

impl<'a> IntoIterator for &'a ClaimStore {
    type Item = &'a ClaimRecord;
    type IntoIter = std::slice::Iter<'a, ClaimRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
