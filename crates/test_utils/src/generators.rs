//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim sessions and dashboard
//! queries that respect the claim store invariants.

use core_kernel::ClaimNumber;
use domain_claims::{ClaimQuery, ClaimRecord, NetworkStatus, PreAuthorization, Priority, PriorityFilter};
use proptest::prelude::*;

use crate::builders::ClaimRecordBuilder;

/// Strategy for generating Priority values
pub fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

/// Strategy for generating PriorityFilter values
pub fn priority_filter_strategy() -> impl Strategy<Value = PriorityFilter> {
    prop_oneof![
        Just(PriorityFilter::All),
        Just(PriorityFilter::Low),
        Just(PriorityFilter::Medium),
        Just(PriorityFilter::High),
    ]
}

/// Strategy for generating network statuses
pub fn network_strategy() -> impl Strategy<Value = NetworkStatus> {
    prop_oneof![Just(NetworkStatus::InNetwork), Just(NetworkStatus::OutOfNetwork)]
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    ("[A-Z][a-z]{2,8}", "[A-Z][a-z]{2,10}").prop_map(|(first, last)| format!("{} {}", first, last))
}

/// Strategy for generating search terms, including empty and mixed-case ones
pub fn search_term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z]{1,3}",
        Just("CLM-2024".to_string()),
        Just("clm-2024-00".to_string()),
    ]
}

/// Strategy for generating dashboard queries
pub fn claim_query_strategy() -> impl Strategy<Value = ClaimQuery> {
    (priority_filter_strategy(), search_term_strategy())
        .prop_map(|(priority_filter, search_term)| ClaimQuery::new(priority_filter, search_term))
}

/// Strategy for generating a session of claims with unique, sequential ids
pub fn claim_records_strategy(max_len: usize) -> impl Strategy<Value = Vec<ClaimRecord>> {
    proptest::collection::vec(
        (
            name_strategy(),
            name_strategy(),
            priority_strategy(),
            network_strategy(),
            1u32..120u32,
            1u32..100_000u32,
            any::<bool>(),
        ),
        0..=max_len,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (patient, provider, priority, network, age, dollars, pre_auth))| {
                ClaimRecordBuilder::default()
                    .id(ClaimNumber::new(2024, i as u32 + 1))
                    .patient_name(patient)
                    .patient_age(age)
                    .provider_name(provider)
                    .priority(priority)
                    .network(network)
                    .amount(format!("${}.00", dollars))
                    .pre_auth(if pre_auth {
                        PreAuthorization::Required
                    } else {
                        PreAuthorization::NotRequired
                    })
                    .build()
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn generated_sessions_have_unique_ids(records in claim_records_strategy(20)) {
            let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
            prop_assert_eq!(ids.len(), records.len());
        }

        #[test]
        fn generated_ages_are_positive(records in claim_records_strategy(10)) {
            prop_assert!(records.iter().all(|r| r.patient.age > 0));
        }
    }
}
