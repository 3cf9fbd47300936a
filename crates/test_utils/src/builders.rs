//! Test Data Builders
//!
//! Provides builder patterns for constructing claim records with sensible
//! defaults. Tests specify only the fields they care about.

use core_kernel::ClaimNumber;
use domain_claims::claim::ClaimRecordDraft;
use domain_claims::{
    ClaimDetails, ClaimRecord, CoverageInfo, NetworkStatus, PatientInfo, PreAuthorization,
    Priority, ProviderInfo,
};

/// Builder for constructing test claim records
pub struct ClaimRecordBuilder {
    id: ClaimNumber,
    patient_name: String,
    patient_age: u32,
    provider_name: String,
    network: NetworkStatus,
    amount: String,
    submitted_date: String,
    priority: Priority,
    pre_auth: PreAuthorization,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new(2024, 1)
    }
}

impl ClaimRecordBuilder {
    /// Creates a new builder for claim `CLM-{year}-{sequence}`
    pub fn new(year: u16, sequence: u32) -> Self {
        Self {
            id: ClaimNumber::new(year, sequence),
            patient_name: "Test Patient".to_string(),
            patient_age: 40,
            provider_name: "Test Provider".to_string(),
            network: NetworkStatus::InNetwork,
            amount: "$1,000.00".to_string(),
            submitted_date: format!("{:04}-01-15", year),
            priority: Priority::Medium,
            pre_auth: PreAuthorization::Required,
        }
    }

    /// Sets the claim id
    pub fn id(mut self, id: ClaimNumber) -> Self {
        self.id = id;
        self
    }

    /// Sets the patient name
    pub fn patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = name.into();
        self
    }

    /// Sets the patient age
    pub fn patient_age(mut self, age: u32) -> Self {
        self.patient_age = age;
        self
    }

    /// Sets the provider name
    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    /// Sets the provider network status
    pub fn network(mut self, network: NetworkStatus) -> Self {
        self.network = network;
        self
    }

    /// Sets the amount text
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Sets the submission date text
    pub fn submitted_date(mut self, date: impl Into<String>) -> Self {
        self.submitted_date = date.into();
        self
    }

    /// Sets the priority
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the pre-authorization requirement
    pub fn pre_auth(mut self, pre_auth: PreAuthorization) -> Self {
        self.pre_auth = pre_auth;
        self
    }

    /// Builds the claim record
    pub fn build(self) -> ClaimRecord {
        let seq = self.id.sequence();
        ClaimRecord {
            patient: PatientInfo {
                name: self.patient_name,
                id: format!("PAT-{:03}", seq),
                age: self.patient_age,
                policy_number: format!("POL-{:06}", seq),
            },
            provider: ProviderInfo {
                name: self.provider_name,
                id: format!("PRV-{:03}", seq),
                network: self.network,
            },
            claim: ClaimDetails {
                diagnosis: "Routine Consultation".to_string(),
                amount: self.amount,
                submitted_date: self.submitted_date,
                priority: self.priority,
                urgency: "Standard Review".to_string(),
            },
            coverage: CoverageInfo {
                status: "Active".to_string(),
                coverage_type: "PPO Gold".to_string(),
                pre_auth: self.pre_auth,
            },
            id: self.id,
        }
    }

    /// Builds the record as a text-typed draft
    pub fn build_draft(self) -> ClaimRecordDraft {
        self.build().into()
    }
}
