//! Claims domain errors

use core_kernel::ClaimNumberError;
use thiserror::Error;

/// A text value that does not name any variant of a closed claim enum
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized {field} value {value:?}")]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

impl UnknownValue {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Errors raised while building a claim store
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duplicate claim id: {0}")]
    DuplicateId(String),

    #[error("Malformed claim id {id:?}: {source}")]
    MalformedId {
        id: String,
        #[source]
        source: ClaimNumberError,
    },

    #[error("Claim {claim_id}: invalid {field} value {value:?}")]
    InvalidEnumValue {
        claim_id: String,
        field: &'static str,
        value: String,
    },

    #[error("Claim {claim_id}: invalid {field}: {message}")]
    InvalidField {
        claim_id: String,
        field: String,
        message: String,
    },

    #[error("Malformed claim data: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ValidationError {
    pub(crate) fn enum_value(claim_id: &str, unknown: UnknownValue) -> Self {
        ValidationError::InvalidEnumValue {
            claim_id: claim_id.to_string(),
            field: unknown.field,
            value: unknown.value,
        }
    }
}

/// Errors raised by payor decision handlers
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Claim {claim_id} is already {status}")]
    AlreadyFinal { claim_id: String, status: String },
}
