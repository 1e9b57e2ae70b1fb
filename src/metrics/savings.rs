//! Savings rate
//!
//! Percentage of income retained over the trailing 12 months. Income and
//! expense totals are queried separately; ledger's running totals carry
//! opposite signs for the two, so after negation the net saving is simply
//! their sum.

use crate::error::DashboardResult;
use crate::ledger::{parse_records, query, LedgerSource};

/// Savings percentage considered healthy by the dashboard
pub const SAVINGS_RATE_TARGET: f64 = 20.0;

/// Compute the savings rate as a floored percentage
///
/// Returns `f64::NEG_INFINITY` when the income total is zero, which leaves
/// the rate undefined.
pub fn savings_rate(source: &dyn LedgerSource) -> DashboardResult<f64> {
    let income = account_total(source, "income")?;
    let expenses = account_total(source, "expenses")?;

    if income == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }

    Ok(((income + expenses) / income * 100.0).floor())
}

/// Whether a rate meets the dashboard's savings target
pub fn meets_target(rate: f64) -> bool {
    rate >= SAVINGS_RATE_TARGET
}

/// Negated last running total for one top-level account
///
/// An unparseable trailing value counts as zero rather than failing the
/// whole dashboard; runner and parser errors still propagate.
fn account_total(source: &dyn LedgerSource, account: &str) -> DashboardResult<f64> {
    let raw = source.run(&query::account_total_args(account))?;
    let records = parse_records(&raw)?;

    let total = records
        .last()
        .and_then(|token| token.parse::<f64>().ok())
        .unwrap_or(0.0);

    Ok(-total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::ledger::testing::ScriptedLedger;

    fn scripted(income: &str, expenses: &str) -> ScriptedLedger {
        ScriptedLedger::new(vec![Ok(income.to_string()), Ok(expenses.to_string())])
    }

    #[test]
    fn test_positive_rate() {
        // income -5000 -> 5000, expenses 4000 -> -4000, saved 20%
        let source = scripted("2023/06/01;$-5,000;", "2023/06/01;$4,000;");
        assert_eq!(savings_rate(&source).unwrap(), 20.0);
    }

    #[test]
    fn test_rate_is_floored() {
        // 5000 - 4001 = 999 -> 19.98% -> 19
        let source = scripted("2023/06/01;$-5,000;", "2023/06/01;$4,001;");
        let rate = savings_rate(&source).unwrap();
        assert_eq!(rate, 19.0);
        assert_eq!(rate.fract(), 0.0);
    }

    #[test]
    fn test_uses_last_running_total() {
        let source = scripted(
            "2023/01/01;$-100;2023/06/01;$-5,000;",
            "2023/01/01;$50;2023/06/01;$2,500;",
        );
        assert_eq!(savings_rate(&source).unwrap(), 50.0);
    }

    #[test]
    fn test_zero_income_is_negative_infinity() {
        let source = scripted("2023/06/01;$0;", "2023/06/01;$4,000;");
        assert_eq!(savings_rate(&source).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_unparseable_last_value_defaults_to_zero() {
        // Last token for income is a date, not a number: income total 0,
        // rate undefined.
        let source = scripted("2023/06/01;$-5,000;2023/07/01;", "2023/06/01;$4,000;");
        assert_eq!(savings_rate(&source).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_negative_rate_when_overspending() {
        // income 1000, expenses -1500 -> -50%
        let source = scripted("2023/06/01;$-1,000;", "2023/06/01;$1,500;");
        assert_eq!(savings_rate(&source).unwrap(), -50.0);
    }

    #[test]
    fn test_runner_errors_propagate() {
        let source = ScriptedLedger::with_error(DashboardError::CommandFailed { code: 1 });
        assert!(savings_rate(&source).is_err());
    }

    #[test]
    fn test_meets_target() {
        assert!(meets_target(20.0));
        assert!(meets_target(55.0));
        assert!(!meets_target(19.0));
        assert!(!meets_target(f64::NEG_INFINITY));
    }
}
