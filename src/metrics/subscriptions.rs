//! Subscription list
//!
//! Transactions tagged as subscriptions over the trailing 12 months, grouped
//! by payee. Ledger does the grouping and the absolute value; this extractor
//! just pairs up the records.

use crate::error::DashboardResult;
use crate::ledger::{parse_records, query, LedgerSource};

use super::NamedAmounts;

/// Fetch subscription payees and their yearly totals
pub fn subscriptions(source: &dyn LedgerSource) -> DashboardResult<NamedAmounts> {
    let raw = source.run(&query::subscriptions_args())?;
    let records = parse_records(&raw)?;
    NamedAmounts::from_records(&records)
}
