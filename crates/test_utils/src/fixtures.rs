//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim records that match the examples used in the
//! dashboard walkthroughs. These fixtures are deterministic.

use core_kernel::{Currency, Money};
use domain_claims::{ClaimRecord, NetworkStatus, PreAuthorization, Priority};
use rust_decimal_macros::dec;

use crate::builders::ClaimRecordBuilder;

/// Fixture for claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// CLM-2024-001, medium priority, patient John Doe
    pub fn john_doe() -> ClaimRecord {
        ClaimRecordBuilder::new(2024, 1)
            .patient_name("John Doe")
            .provider_name("City General Hospital")
            .priority(Priority::Medium)
            .amount("$15,750.00")
            .build()
    }

    /// CLM-2024-002, low priority, patient Jane Smith
    pub fn jane_smith() -> ClaimRecord {
        ClaimRecordBuilder::new(2024, 2)
            .patient_name("Jane Smith")
            .provider_name("Wellness Family Clinic")
            .priority(Priority::Low)
            .amount("$450.00")
            .pre_auth(PreAuthorization::NotRequired)
            .build()
    }

    /// CLM-2024-003, high priority, patient Mike Johnson
    pub fn mike_johnson() -> ClaimRecord {
        ClaimRecordBuilder::new(2024, 3)
            .patient_name("Mike Johnson")
            .provider_name("Metro Heart Institute")
            .priority(Priority::High)
            .amount("$28,900.00")
            .network(NetworkStatus::OutOfNetwork)
            .build()
    }

    /// The three-claim session used by the filter scenarios
    pub fn scenario_records() -> Vec<ClaimRecord> {
        vec![Self::john_doe(), Self::jane_smith(), Self::mike_johnson()]
    }

    /// The scenario session as a JSON array, in the wire shape
    pub fn scenario_json() -> String {
        serde_json::to_string(&Self::scenario_records())
            .expect("fixture records always serialize")
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard USD amount for testing
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Total claimed across the scenario records
    pub fn scenario_total() -> Money {
        Money::new(dec!(45100.00), Currency::USD)
    }
}
