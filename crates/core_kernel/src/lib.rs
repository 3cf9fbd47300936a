//! Core Kernel - Foundational value types for the claims triage workspace
//!
//! This crate provides the building blocks shared by the claims domain and
//! the dashboard adapter:
//! - Money types with precise decimal arithmetic and display-text parsing
//! - The `CLM-YYYY-NNN` claim number

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ClaimNumber, ClaimNumberError};
