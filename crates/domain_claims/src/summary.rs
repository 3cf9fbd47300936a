//! Dashboard header statistics

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};
use crate::claim::{ClaimRecord, NetworkStatus, Priority};
use crate::fees::processing_fee;

/// Number of claims per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl PriorityCounts {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }

    fn bump(&mut self, priority: Priority) {
        match priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
        }
    }
}

/// Aggregate figures for a set of claims
///
/// Amounts are totalled in USD. Amount text that does not parse, is written
/// in another currency, or would overflow the running total is counted in
/// `unparsed_amounts` and left out of the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub total: usize,
    pub by_priority: PriorityCounts,
    pub in_network: usize,
    pub out_of_network: usize,
    pub pre_auth_required: usize,
    pub total_amount: Money,
    pub total_processing_fees: Money,
    pub unparsed_amounts: usize,
}

impl Default for ClaimSummary {
    fn default() -> Self {
        Self {
            total: 0,
            by_priority: PriorityCounts::default(),
            in_network: 0,
            out_of_network: 0,
            pre_auth_required: 0,
            total_amount: Money::zero(Currency::USD),
            total_processing_fees: Money::zero(Currency::USD),
            unparsed_amounts: 0,
        }
    }
}

impl ClaimSummary {
    /// Summarizes the given records
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ClaimRecord>,
    {
        records.into_iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;
            summary.by_priority.bump(record.claim.priority);

            match record.provider.network {
                NetworkStatus::InNetwork => summary.in_network += 1,
                NetworkStatus::OutOfNetwork => summary.out_of_network += 1,
            }
            if record.coverage.pre_auth.is_required() {
                summary.pre_auth_required += 1;
            }

            let added = record.amount().ok().and_then(|amount| {
                let total = summary.total_amount.checked_add(&amount).ok()?;
                let fees = summary
                    .total_processing_fees
                    .checked_add(&processing_fee(&amount))
                    .ok()?;
                Some((total, fees))
            });

            match added {
                Some((total, fees)) => {
                    summary.total_amount = total;
                    summary.total_processing_fees = fees;
                }
                None => {
                    tracing::debug!(
                        claim_id = %record.id,
                        amount = %record.claim.amount,
                        "Claim amount left out of summary totals"
                    );
                    summary.unparsed_amounts += 1;
                }
            }

            summary
        })
    }
}
