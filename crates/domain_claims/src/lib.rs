//! Claims Triage Domain
//!
//! This crate holds the claim records a payor dashboard works from and the
//! pure logic the dashboards call into.
//!
//! # Flow
//!
//! ```text
//! records -> ClaimStore (validated, immutable) -> filter(query) -> rendered rows
//!                                              -> ClaimSummary
//!                                              -> DecisionHandler (Approve/Reject/RequestInfo)
//! ```

pub mod claim;
pub mod store;
pub mod query;
pub mod summary;
pub mod fees;
pub mod decision;
pub mod seed;
pub mod error;

pub use claim::{
    ClaimRecord, ClaimRecordDraft, ClaimDetails, CoverageInfo, NetworkStatus, PatientInfo,
    PreAuthorization, Priority, ProviderInfo,
};
pub use store::ClaimStore;
pub use query::{filter, priority_label, ClaimQuery, PriorityFilter};
pub use summary::{ClaimSummary, PriorityCounts};
pub use fees::processing_fee;
pub use decision::{ClaimCommand, DecisionHandler, DecisionLog, DecisionRecord, DecisionStatus};
pub use error::{DecisionError, UnknownValue, ValidationError};
