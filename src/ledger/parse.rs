//! Record parser for ledger report output
//!
//! The dashboard asks ledger to emit semicolon-delimited fields via format
//! strings like `%(date);%(T);`. This module turns that raw text into a flat
//! token sequence: currency formatting is stripped first so numeric tokens
//! parse cleanly, then the text is split on `;` and empty tokens (trailing
//! splits, bare newlines between records) are discarded.
//!
//! Callers assume alternating value/label structure according to their own
//! format string; even length is not enforced here.

use crate::error::{DashboardError, DashboardResult};

/// Remove currency symbols and thousands separators
///
/// Idempotent: stripping already-stripped text is a no-op.
pub fn strip_currency(raw: &str) -> String {
    raw.replace(['$', ','], "")
}

/// Split raw report output into a filtered token sequence
///
/// Fails with [`DashboardError::EmptyData`] when nothing survives the
/// filtering, which means the journal had no matching transactions.
pub fn parse_records(raw: &str) -> DashboardResult<Vec<String>> {
    let records: Vec<String> = strip_currency(raw)
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if records.is_empty() {
        return Err(DashboardError::EmptyData);
    }

    Ok(records)
}

/// Parse a numeric token from a record
///
/// An empty token counts as zero (ledger emits nothing for zero-valued
/// fields in some report modes); any other unparseable token is an error.
pub fn parse_amount(token: &str) -> DashboardResult<f64> {
    if token.is_empty() {
        return Ok(0.0);
    }
    token
        .parse::<f64>()
        .map_err(|_| DashboardError::bad_amount(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_currency() {
        assert_eq!(strip_currency("$1,234.56"), "1234.56");
        assert_eq!(strip_currency("no formatting"), "no formatting");
    }

    #[test]
    fn test_strip_currency_idempotent() {
        let once = strip_currency("$1,234.56;2023/01/01;");
        assert_eq!(strip_currency(&once), once);
    }

    #[test]
    fn test_parse_records_splits_and_filters() {
        let records = parse_records("2023/01/01;$1,234.56;\n2023/01/08;$2,000;").unwrap();
        assert_eq!(records, vec!["2023/01/01", "1234.56", "2023/01/08", "2000"]);
    }

    #[test]
    fn test_even_input_stays_even() {
        let records = parse_records("a;1;b;2;c;3;").unwrap();
        assert_eq!(records.len() % 2, 0);
    }

    #[test]
    fn test_separator_only_input_is_empty_data() {
        let err = parse_records(";;;\n;").unwrap_err();
        assert!(matches!(err, DashboardError::EmptyData));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("-42").unwrap(), -42.0);
        assert_eq!(parse_amount("").unwrap(), 0.0);
        assert!(parse_amount("not-a-number").is_err());
    }
}
