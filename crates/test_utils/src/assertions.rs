//! Custom Test Assertions
//!
//! Provides assertion helpers for filtered claim views that give more
//! meaningful failure messages than comparing whole records.

use core_kernel::Money;
use domain_claims::ClaimRecord;
use rust_decimal::Decimal;

/// Asserts that a view holds exactly the given claim ids, in order
pub fn assert_claim_ids(view: &[&ClaimRecord], expected: &[&str]) {
    let actual: Vec<&str> = view.iter().map(|r| r.id_str()).collect();
    assert_eq!(
        actual, expected,
        "Filtered view ids differ: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that `view` is an order-preserving subset of `source`
///
/// # Panics
///
/// Panics if a record in `view` is missing from `source` or appears out of order
pub fn assert_subsequence(view: &[&ClaimRecord], source: &[ClaimRecord]) {
    let mut remaining = source.iter();
    for record in view {
        assert!(
            remaining.any(|candidate| std::ptr::eq(candidate, *record)),
            "Record {} is not in the source or is out of order",
            record.id
        );
    }
}

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}
