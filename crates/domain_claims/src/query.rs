//! Claim filtering for the dashboards
//!
//! [`filter`] is the single entry point the presentation layer calls on every
//! query change. It is a pure, stable filter: records are never copied or
//! reordered, and the same input always yields the same output.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::claim::{ClaimRecord, Priority};

/// Label used when a priority value is not recognized
pub const DEFAULT_PRIORITY_LABEL: &str = "Standard";

/// Priority selection from the dashboard filter control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    /// Parses filter text, treating anything unrecognized as `All`
    pub fn parse_lenient(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "all" | "" => PriorityFilter::All,
            "low" => PriorityFilter::Low,
            "medium" => PriorityFilter::Medium,
            "high" => PriorityFilter::High,
            _ => {
                tracing::debug!(value = %text, "Unrecognized priority filter, showing all priorities");
                PriorityFilter::All
            }
        }
    }

    /// Returns true if a claim of the given priority passes this filter
    pub fn admits(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == Priority::Low,
            PriorityFilter::Medium => priority == Priority::Medium,
            PriorityFilter::High => priority == Priority::High,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => PriorityFilter::Low,
            Priority::Medium => PriorityFilter::Medium,
            Priority::High => PriorityFilter::High,
        }
    }
}

impl From<String> for PriorityFilter {
    fn from(text: String) -> Self {
        Self::parse_lenient(&text)
    }
}

impl FromStr for PriorityFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

/// The dashboard's current filter state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimQuery {
    pub priority_filter: PriorityFilter,
    pub search_term: String,
}

impl ClaimQuery {
    pub fn new(priority_filter: PriorityFilter, search_term: impl Into<String>) -> Self {
        Self {
            priority_filter,
            search_term: search_term.into(),
        }
    }

    /// A query that admits every record
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority_filter: PriorityFilter) -> Self {
        self.priority_filter = priority_filter;
        self
    }

    pub fn with_search(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    /// Returns true if this query admits every record
    pub fn is_unfiltered(&self) -> bool {
        self.priority_filter == PriorityFilter::All && self.search_term.is_empty()
    }
}

/// Filters claim records by priority and free-text search.
///
/// A record is kept when it passes the priority gate and the search gate. The
/// search gate matches the lower-cased term as a substring of the lower-cased
/// patient name, claim id, or provider name; an empty term matches everything.
/// Lower-casing is `str::to_lowercase`, the full Unicode mapping, so `İ`
/// becomes `i̇` and never matches a plain `i`. Surviving records keep their
/// input order.
pub fn filter<'a, I>(records: I, query: &ClaimQuery) -> Vec<&'a ClaimRecord>
where
    I: IntoIterator<Item = &'a ClaimRecord>,
{
    let needle = query.search_term.to_lowercase();

    records
        .into_iter()
        .filter(|record| query.priority_filter.admits(record.claim.priority))
        .filter(|record| matches_search(record, &needle))
        .collect()
}

fn matches_search(record: &ClaimRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.patient.name.to_lowercase().contains(needle)
        || record.id.as_str().to_lowercase().contains(needle)
        || record.provider.name.to_lowercase().contains(needle)
}

/// Maps raw priority text to its badge label, falling back to "Standard"
pub fn priority_label(raw: &str) -> &'static str {
    raw.parse::<Priority>()
        .map(|p| p.label())
        .unwrap_or(DEFAULT_PRIORITY_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_label_known_values() {
        assert_eq!(priority_label("high"), "High Priority");
        assert_eq!(priority_label("medium"), "Medium Priority");
        assert_eq!(priority_label("low"), "Low Priority");
    }

    #[test]
    fn test_priority_label_falls_back_to_standard() {
        assert_eq!(priority_label("critical"), "Standard");
        assert_eq!(priority_label(""), "Standard");
    }

    #[test]
    fn test_lenient_filter_parsing() {
        assert_eq!(PriorityFilter::parse_lenient("HIGH"), PriorityFilter::High);
        assert_eq!(PriorityFilter::parse_lenient("urgent"), PriorityFilter::All);
        assert_eq!("".parse::<PriorityFilter>(), Ok(PriorityFilter::All));
    }

    #[test]
    fn test_all_filter_admits_every_priority() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert!(PriorityFilter::All.admits(p));
            assert!(PriorityFilter::from(p).admits(p));
        }
        assert!(!PriorityFilter::High.admits(Priority::Low));
    }

    #[test]
    fn test_query_deserializes_unknown_filter_as_all() {
        let query: ClaimQuery =
            serde_json::from_str(r#"{"priorityFilter":"urgent","searchTerm":"doe"}"#).unwrap();
        assert_eq!(query.priority_filter, PriorityFilter::All);
        assert_eq!(query.search_term, "doe");
    }

    #[test]
    fn test_query_defaults_missing_fields() {
        let query: ClaimQuery = serde_json::from_str("{}").unwrap();
        assert!(query.is_unfiltered());
    }
}
