//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims triage test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim records and money values
//! - `builders`: Builder patterns for claim record construction
//! - `assertions`: Custom assertion helpers for filtered views
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
