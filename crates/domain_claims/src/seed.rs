//! Session mock data
//!
//! The dashboards start from a fixed, fictional set of claims. Nothing here
//! refers to real patients or providers.

use core_kernel::ClaimNumber;
use crate::claim::{
    ClaimDetails, ClaimRecord, CoverageInfo, NetworkStatus, PatientInfo, PreAuthorization,
    Priority, ProviderInfo,
};

/// Returns the claims every dashboard session starts with
pub fn session_claims() -> Vec<ClaimRecord> {
    vec![
        ClaimRecord {
            id: ClaimNumber::new(2024, 1),
            patient: patient("John Doe", "PAT-001", 45, "POL-789456"),
            provider: provider("City General Hospital", "PRV-001", NetworkStatus::InNetwork),
            claim: ClaimDetails {
                diagnosis: "Acute Appendicitis".to_string(),
                amount: "$15,750.00".to_string(),
                submitted_date: "2024-01-15".to_string(),
                priority: Priority::Medium,
                urgency: "Standard Review".to_string(),
            },
            coverage: coverage("PPO Gold", PreAuthorization::Required),
        },
        ClaimRecord {
            id: ClaimNumber::new(2024, 2),
            patient: patient("Jane Smith", "PAT-002", 32, "POL-789457"),
            provider: provider("Wellness Family Clinic", "PRV-002", NetworkStatus::InNetwork),
            claim: ClaimDetails {
                diagnosis: "Annual Physical Examination".to_string(),
                amount: "$450.00".to_string(),
                submitted_date: "2024-01-16".to_string(),
                priority: Priority::Low,
                urgency: "Routine".to_string(),
            },
            coverage: coverage("HMO Silver", PreAuthorization::NotRequired),
        },
        ClaimRecord {
            id: ClaimNumber::new(2024, 3),
            patient: patient("Mike Johnson", "PAT-003", 58, "POL-789458"),
            provider: provider("Metro Heart Institute", "PRV-003", NetworkStatus::OutOfNetwork),
            claim: ClaimDetails {
                diagnosis: "Cardiac Catheterization".to_string(),
                amount: "$28,900.00".to_string(),
                submitted_date: "2024-01-17".to_string(),
                priority: Priority::High,
                urgency: "Urgent".to_string(),
            },
            coverage: coverage("PPO Platinum", PreAuthorization::Required),
        },
    ]
}

fn patient(name: &str, id: &str, age: u32, policy_number: &str) -> PatientInfo {
    PatientInfo {
        name: name.to_string(),
        id: id.to_string(),
        age,
        policy_number: policy_number.to_string(),
    }
}

fn provider(name: &str, id: &str, network: NetworkStatus) -> ProviderInfo {
    ProviderInfo {
        name: name.to_string(),
        id: id.to_string(),
        network,
    }
}

fn coverage(coverage_type: &str, pre_auth: PreAuthorization) -> CoverageInfo {
    CoverageInfo {
        status: "Active".to_string(),
        coverage_type: coverage_type.to_string(),
        pre_auth,
    }
}
