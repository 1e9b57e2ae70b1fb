//! Top payees
//!
//! The five largest expense payees over the trailing 12 months. Sorting,
//! totalling and the head limit all happen tool-side (`-S -T --head`).

use crate::error::DashboardResult;
use crate::ledger::{parse_records, query, LedgerSource};

use super::NamedAmounts;

/// Fetch the top expense payees and their yearly totals
pub fn top_payees(source: &dyn LedgerSource) -> DashboardResult<NamedAmounts> {
    let raw = source.run(&query::top_payees_args())?;
    let records = parse_records(&raw)?;
    NamedAmounts::from_records(&records)
}
