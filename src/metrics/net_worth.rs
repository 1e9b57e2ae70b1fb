//! Net worth over time
//!
//! Weekly register of asset and liability accounts at market value. Amounts
//! stay in base currency units here; scaling to thousands happens at chart
//! build time.

use chrono::NaiveDate;

use crate::error::{DashboardError, DashboardResult};
use crate::ledger::{parse_amount, parse_records, query, LedgerSource};

/// Date format ledger uses in register output
const DATE_FORMAT: &str = "%Y/%m/%d";

/// One point of the net worth series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetWorthPoint {
    /// Week-end date as emitted by ledger
    pub date: NaiveDate,
    /// Net worth in base currency units
    pub amount: f64,
}

/// Fetch the weekly net worth series
///
/// The report emits alternating date/total pairs, chronological as ledger
/// orders them.
pub fn net_worth_series(source: &dyn LedgerSource) -> DashboardResult<Vec<NetWorthPoint>> {
    let raw = source.run(&query::net_worth_args())?;
    let records = parse_records(&raw)?;

    let mut series = Vec::with_capacity(records.len() / 2);
    for pair in records.chunks(2) {
        let [date, amount] = pair else { break };
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| DashboardError::bad_date(date))?;
        series.push(NetWorthPoint {
            date,
            amount: parse_amount(amount)?,
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::ledger::testing::ScriptedLedger;

    #[test]
    fn test_parses_dates_and_amounts() {
        let source = ScriptedLedger::with_output("2023/01/01;$1,234.56;2023/01/08;$2,000;");
        let series = net_worth_series(&source).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(
            series[0].date,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(series[0].amount, 1234.56);
        assert_eq!(
            series[1].date,
            NaiveDate::from_ymd_opt(2023, 1, 8).unwrap()
        );
        assert_eq!(series[1].amount, 2000.0);
    }

    #[test]
    fn test_amounts_stay_in_base_units() {
        let source = ScriptedLedger::with_output("2023/01/01;$150,000;");
        let series = net_worth_series(&source).unwrap();
        assert_eq!(series[0].amount, 150_000.0);
    }

    #[test]
    fn test_command_failure_yields_no_partial_series() {
        let source = ScriptedLedger::with_error(DashboardError::CommandFailed { code: 1 });
        let err = net_worth_series(&source).unwrap_err();
        assert!(matches!(err, DashboardError::CommandFailed { code: 1 }));
    }

    #[test]
    fn test_empty_output_propagates() {
        let source = ScriptedLedger::with_error(DashboardError::EmptyOutput);
        let err = net_worth_series(&source).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyOutput));
    }

    #[test]
    fn test_malformed_date_is_parse_error() {
        let source = ScriptedLedger::with_output("yesterday;$100;");
        let err = net_worth_series(&source).unwrap_err();
        assert!(matches!(err, DashboardError::Parse(_)));
    }
}
