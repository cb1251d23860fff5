//! Per-merchant and per-month accumulation over the full transaction set.
//!
//! The merchant table is an insertion-ordered Vec, not a hash map: the top
//! merchant is chosen with a strict comparison so equal totals resolve to
//! whichever canonical name was inserted first. That tie-break is part of the
//! observable contract and must not depend on hash iteration order.

use chrono::{Datelike, NaiveDate};

use crate::merchant::canonical_merchant;
use crate::report::{MonthlySpend, Transaction};

pub const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

#[derive(Debug, Clone, PartialEq)]
pub struct MerchantAggregate {
    pub name: String,
    pub count: usize,
    pub total: f64,
}

/// Accumulates one document's transactions into merchant and month totals.
#[derive(Debug, Default)]
pub struct Aggregator {
    merchants: Vec<MerchantAggregate>,
    monthly: [f64; 12],
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, transaction: &Transaction) {
        if let Some(name) = canonical_merchant(&transaction.description) {
            match self.merchants.iter_mut().find(|m| m.name == name) {
                Some(merchant) => {
                    merchant.count += 1;
                    merchant.total += transaction.amount;
                }
                None => self.merchants.push(MerchantAggregate {
                    name,
                    count: 1,
                    total: transaction.amount,
                }),
            }
        }

        // A date that resolves to no month keeps the transaction out of the
        // monthly breakdown only; totals and merchants above already saw it.
        if let Some(month) = resolve_month(&transaction.date) {
            self.monthly[month as usize - 1] += transaction.amount;
        }
    }

    pub fn merchants(&self) -> &[MerchantAggregate] {
        &self.merchants
    }

    /// Highest-total merchant; ties go to the first-inserted.
    pub fn top_merchant(&self) -> Option<&MerchantAggregate> {
        let mut best: Option<&MerchantAggregate> = None;
        for merchant in &self.merchants {
            if best.map_or(true, |b| merchant.total > b.total) {
                best = Some(merchant);
            }
        }
        best
    }

    /// Nonzero month buckets in calendar order, Jan through Dec.
    pub fn monthly_spend(&self) -> Vec<MonthlySpend> {
        MONTH_LABELS
            .iter()
            .zip(self.monthly.iter())
            .filter(|(_, amount)| **amount > 0.0)
            .map(|(label, amount)| MonthlySpend {
                month: (*label).to_string(),
                amount: *amount,
            })
            .collect()
    }
}

/// Resolve a raw date token to a calendar month (1-12).
///
/// A full calendar parse is attempted first; statement rows usually carry no
/// year, so the fallback splits the token and takes the first component as
/// the month when it can plausibly be one, else the second. The year is never
/// disambiguated: statements spanning a year boundary merge same-named months
/// from different years into one bucket.
pub fn resolve_month(raw_date: &str) -> Option<u32> {
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw_date, format) {
            return Some(date.month());
        }
    }

    let mut parts = raw_date.split(['/', '-']);
    let first: Option<u32> = parts.next().and_then(|p| p.parse().ok());
    let second: Option<u32> = parts.next().and_then(|p| p.parse().ok());

    let month = match (first, second) {
        (Some(m), _) if m <= 12 => m,
        (_, Some(m)) if m <= 12 => m,
        _ => return None,
    };

    (1..=12).contains(&month).then_some(month)
}
