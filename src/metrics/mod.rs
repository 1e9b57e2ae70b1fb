//! Metric extractors
//!
//! Five independent transformations, each running one ledger report through
//! a [`LedgerSource`](crate::ledger::LedgerSource) and the record parser,
//! then applying its own arithmetic. Extractors share no state; a render
//! pass collects them sequentially via [`Dashboard::collect`].

pub mod expenses;
pub mod net_worth;
pub mod savings;
pub mod subscriptions;
pub mod top_payees;

pub use expenses::{expense_breakdown, ExpenseBreakdown};
pub use net_worth::{net_worth_series, NetWorthPoint};
pub use savings::{meets_target, savings_rate, SAVINGS_RATE_TARGET};
pub use subscriptions::subscriptions;
pub use top_payees::top_payees;

use crate::error::DashboardResult;
use crate::ledger::{parse_amount, LedgerSource};

/// Parallel name/amount columns for list cards
///
/// Index `i` in both vectors refers to the same entity; the vectors always
/// have equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedAmounts {
    /// Entity names (payees)
    pub names: Vec<String>,
    /// Amounts in currency units
    pub amounts: Vec<f64>,
}

impl NamedAmounts {
    /// Build from a flat token sequence of alternating name/amount pairs
    ///
    /// A trailing unpaired name is dropped, matching how the reports
    /// terminate every record with a separator.
    pub(crate) fn from_records(records: &[String]) -> DashboardResult<Self> {
        let mut names = Vec::with_capacity(records.len() / 2);
        let mut amounts = Vec::with_capacity(records.len() / 2);

        for pair in records.chunks(2) {
            let [name, amount] = pair else { break };
            names.push(name.clone());
            amounts.push(parse_amount(amount)?);
        }

        Ok(Self { names, amounts })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over (name, amount) rows
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.amounts.iter().copied())
    }
}

/// One fully-collected render pass of dashboard data
///
/// Built fresh per run and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Weekly net worth series in base currency units
    pub net_worth: Vec<NetWorthPoint>,
    /// Expense totals by top-level category, in thousands
    pub expenses: ExpenseBreakdown,
    /// Subscription payees over the trailing year
    pub subscriptions: NamedAmounts,
    /// Largest expense payees over the trailing year
    pub top_payees: NamedAmounts,
    /// Floored savings percentage, or negative infinity when undefined
    pub savings_rate: f64,
}

impl Dashboard {
    /// Collect all five metrics sequentially
    ///
    /// Fails on the first extractor error; there is no partial-dashboard
    /// degraded mode.
    pub fn collect(source: &dyn LedgerSource) -> DashboardResult<Self> {
        Ok(Self {
            net_worth: net_worth_series(source)?,
            expenses: expense_breakdown(source)?,
            subscriptions: subscriptions(source)?,
            top_payees: top_payees(source)?,
            savings_rate: savings_rate(source)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::ledger::testing::ScriptedLedger;

    #[test]
    fn test_named_amounts_from_records() {
        let records: Vec<String> = ["Netflix", "15.99", "Spotify", "9.99"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let list = NamedAmounts::from_records(&records).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.names, vec!["Netflix", "Spotify"]);
        assert_eq!(list.amounts, vec![15.99, 9.99]);
    }

    #[test]
    fn test_named_amounts_drops_unpaired_trailing_name() {
        let records: Vec<String> = ["Netflix", "15.99", "Dangling"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let list = NamedAmounts::from_records(&records).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_collect_fails_on_first_error() {
        // First query (net worth) fails; nothing else should matter.
        let source = ScriptedLedger::with_error(DashboardError::CommandFailed { code: 1 });
        let err = Dashboard::collect(&source).unwrap_err();
        assert!(matches!(err, DashboardError::CommandFailed { code: 1 }));
    }

    #[test]
    fn test_collect_happy_path() {
        let source = ScriptedLedger::new(vec![
            Ok("2023/01/01;$1,000;2023/01/08;$1,100;".to_string()),
            Ok("$500;Expenses:Food:Groceries;$250;Expenses:Rent;".to_string()),
            Ok("Netflix;15.99;".to_string()),
            Ok("Landlord;1200;".to_string()),
            Ok("2023/06/01;$-5000;".to_string()),
            Ok("2023/06/01;$4000;".to_string()),
        ]);

        let dashboard = Dashboard::collect(&source).unwrap();
        assert_eq!(dashboard.net_worth.len(), 2);
        assert_eq!(dashboard.expenses.len(), 2);
        assert_eq!(dashboard.subscriptions.len(), 1);
        assert_eq!(dashboard.top_payees.len(), 1);
        // income 5000, expenses -4000 -> 20% saved
        assert_eq!(dashboard.savings_rate, 20.0);
    }
}
