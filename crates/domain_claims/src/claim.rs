//! Claim records
//!
//! A [`ClaimRecord`] is the immutable row a dashboard renders. Records are
//! built once per session, either directly as typed values or from
//! [`ClaimRecordDraft`]s whose enum fields are still plain text (the shape the
//! mock data and JSON input use).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ClaimNumber, Money, MoneyError};
use crate::error::{UnknownValue, ValidationError};

/// Urgency classification of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Returns the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Returns the badge label shown next to a claim
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low Priority",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(UnknownValue::new("priority", other)),
        }
    }
}

/// Whether the provider is contracted with the payor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkStatus {
    #[serde(rename = "In-Network")]
    InNetwork,
    #[serde(rename = "Out-of-Network")]
    OutOfNetwork,
}

impl NetworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkStatus::InNetwork => "In-Network",
            NetworkStatus::OutOfNetwork => "Out-of-Network",
        }
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In-Network" => Ok(NetworkStatus::InNetwork),
            "Out-of-Network" => Ok(NetworkStatus::OutOfNetwork),
            other => Err(UnknownValue::new("network", other)),
        }
    }
}

/// Pre-authorization requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreAuthorization {
    Required,
    #[serde(rename = "Not Required")]
    NotRequired,
}

impl PreAuthorization {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreAuthorization::Required => "Required",
            PreAuthorization::NotRequired => "Not Required",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, PreAuthorization::Required)
    }
}

impl fmt::Display for PreAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreAuthorization {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Required" => Ok(PreAuthorization::Required),
            "Not Required" => Ok(PreAuthorization::NotRequired),
            other => Err(UnknownValue::new("preAuth", other)),
        }
    }
}

/// Patient the claim was filed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    #[validate(length(min = 1))]
    pub name: String,
    pub id: String,
    #[validate(range(min = 1))]
    pub age: u32,
    pub policy_number: String,
}

/// Provider that rendered the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    #[validate(length(min = 1))]
    pub name: String,
    pub id: String,
    pub network: NetworkStatus,
}

/// Clinical and financial details of the claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetails {
    pub diagnosis: String,
    /// Display text, e.g. `"$2,500.00"`
    pub amount: String,
    /// ISO-like date text, e.g. `"2024-01-15"`
    pub submitted_date: String,
    pub priority: Priority,
    pub urgency: String,
}

/// Coverage the claim is filed against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageInfo {
    pub status: String,
    #[serde(rename = "type")]
    pub coverage_type: String,
    pub pre_auth: PreAuthorization,
}

/// A single insurance claim as shown on the dashboards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: ClaimNumber,
    pub patient: PatientInfo,
    pub provider: ProviderInfo,
    pub claim: ClaimDetails,
    pub coverage: CoverageInfo,
}

impl ClaimRecord {
    /// Returns the claim id as text
    pub fn id_str(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the claim priority
    pub fn priority(&self) -> Priority {
        self.claim.priority
    }

    /// Parses the claimed amount text
    pub fn amount(&self) -> Result<Money, MoneyError> {
        Money::parse_display(&self.claim.amount)
    }

    /// Parses the submission date, accepting a trailing time component
    pub fn submitted_on(&self) -> Option<NaiveDate> {
        let text = self.claim.submitted_date.trim();
        let date = text.get(..10).unwrap_or(text);
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }

    /// Checks the field-level rules on patient and provider
    pub fn validate_fields(&self) -> Result<(), ValidationError> {
        self.patient
            .validate()
            .map_err(|e| ValidationError::InvalidField {
                claim_id: self.id.to_string(),
                field: "patient".to_string(),
                message: e.to_string(),
            })?;
        self.provider
            .validate()
            .map_err(|e| ValidationError::InvalidField {
                claim_id: self.id.to_string(),
                field: "provider".to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

/// Provider details before the network value has been checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDraft {
    pub name: String,
    pub id: String,
    pub network: String,
}

/// Claim details before the priority value has been checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetailsDraft {
    pub diagnosis: String,
    pub amount: String,
    pub submitted_date: String,
    pub priority: String,
    pub urgency: String,
}

/// Coverage details before the pre-auth value has been checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageDraft {
    pub status: String,
    #[serde(rename = "type")]
    pub coverage_type: String,
    pub pre_auth: String,
}

/// A claim record as supplied by a data source, with enum fields as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecordDraft {
    pub id: String,
    pub patient: PatientInfo,
    pub provider: ProviderDraft,
    pub claim: ClaimDetailsDraft,
    pub coverage: CoverageDraft,
}

impl ClaimRecordDraft {
    /// Checks every enum field and the id format, producing a typed record
    pub fn into_record(self) -> Result<ClaimRecord, ValidationError> {
        let id: ClaimNumber = self
            .id
            .parse::<ClaimNumber>()
            .map_err(|source| ValidationError::MalformedId {
                id: self.id.clone(),
                source,
            })?;

        let network = self
            .provider
            .network
            .parse::<NetworkStatus>()
            .map_err(|e| ValidationError::enum_value(&self.id, e))?;
        let priority = self
            .claim
            .priority
            .parse::<Priority>()
            .map_err(|e| ValidationError::enum_value(&self.id, e))?;
        let pre_auth = self
            .coverage
            .pre_auth
            .parse::<PreAuthorization>()
            .map_err(|e| ValidationError::enum_value(&self.id, e))?;

        let record = ClaimRecord {
            id,
            patient: self.patient,
            provider: ProviderInfo {
                name: self.provider.name,
                id: self.provider.id,
                network,
            },
            claim: ClaimDetails {
                diagnosis: self.claim.diagnosis,
                amount: self.claim.amount,
                submitted_date: self.claim.submitted_date,
                priority,
                urgency: self.claim.urgency,
            },
            coverage: CoverageInfo {
                status: self.coverage.status,
                coverage_type: self.coverage.coverage_type,
                pre_auth,
            },
        };

        record.validate_fields()?;
        Ok(record)
    }
}

impl From<ClaimRecord> for ClaimRecordDraft {
    fn from(record: ClaimRecord) -> Self {
        Self {
            id: record.id.to_string(),
            patient: record.patient,
            provider: ProviderDraft {
                name: record.provider.name,
                id: record.provider.id,
                network: record.provider.network.as_str().to_string(),
            },
            claim: ClaimDetailsDraft {
                diagnosis: record.claim.diagnosis,
                amount: record.claim.amount,
                submitted_date: record.claim.submitted_date,
                priority: record.claim.priority.as_str().to_string(),
                urgency: record.claim.urgency,
            },
            coverage: CoverageDraft {
                status: record.coverage.status,
                coverage_type: record.coverage.coverage_type,
                pre_auth: record.coverage.pre_auth.as_str().to_string(),
            },
        }
    }
}
