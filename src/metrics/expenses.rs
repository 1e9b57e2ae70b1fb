//! Expense breakdown by category
//!
//! Flat balance report over all expense accounts, aggregated by the
//! top-level category beneath the root "Expenses" segment and scaled to
//! thousands immediately.

use std::collections::BTreeMap;

use crate::error::DashboardResult;
use crate::ledger::{parse_amount, parse_records, query, LedgerSource};

/// Expense totals aggregated by top-level category, in thousands
///
/// Keys are unique category names; repeated categories are summed. A
/// `BTreeMap` keeps bar ordering stable between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseBreakdown {
    categories: BTreeMap<String, f64>,
}

impl ExpenseBreakdown {
    /// Add an amount (already in thousands) to a category
    fn add(&mut self, category: &str, amount_k: f64) {
        *self.categories.entry(category.to_string()).or_insert(0.0) += amount_k;
    }

    /// Total for one category, if present
    pub fn get(&self, category: &str) -> Option<f64> {
        self.categories.get(category).copied()
    }

    /// Iterate over (category, amount-in-thousands) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the breakdown is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Largest category total, or zero when empty
    pub fn max_amount(&self) -> f64 {
        self.categories.values().copied().fold(0.0, f64::max)
    }
}

/// Fetch expense balances aggregated by top-level category
///
/// The report emits alternating total/account pairs. The aggregation key is
/// the second colon-delimited path segment ("Food" in
/// `Expenses:Food:Groceries`); a path without one falls back to its first
/// segment.
pub fn expense_breakdown(source: &dyn LedgerSource) -> DashboardResult<ExpenseBreakdown> {
    let raw = source.run(&query::expenses_args())?;
    let records = parse_records(&raw)?;

    let mut breakdown = ExpenseBreakdown::default();
    for pair in records.chunks(2) {
        let [amount, account] = pair else { break };
        let amount_k = parse_amount(amount)? / 1000.0;

        let mut segments = account.split(':');
        let root = segments.next().unwrap_or(account.as_str());
        let category = segments.next().unwrap_or(root);

        breakdown.add(category, amount_k);
    }

    Ok(breakdown)
}
