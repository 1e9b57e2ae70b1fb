//! Report argument vectors
//!
//! Each dashboard metric maps to one ledger report invocation. The argument
//! lists here cover everything after the journal file selection, which the
//! runner supplies.

use chrono::{Datelike, Local};

/// How many payees the top-payee report asks for
pub const TOP_PAYEE_COUNT: usize = 5;

/// Begin date for trailing-12-month reports, in ledger's `Y/M/D` format
///
/// Deliberately naive: same month and day with the year decremented, no
/// leap-year or month-length adjustment. Ledger accepts the string as-is.
pub fn year_ago_date() -> String {
    let today = Local::now().date_naive();
    format!("{}/{}/{}", today.year() - 1, today.month(), today.day())
}

fn to_args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Weekly market-value register of assets and liabilities
pub fn net_worth_args() -> Vec<String> {
    to_args(&[
        "reg",
        "assets",
        "liabilities",
        "--weekly",
        "-V",
        "-n",
        "-F",
        "%(date);%(T);",
    ])
}

/// Flat balance report of all expense accounts
pub fn expenses_args() -> Vec<String> {
    to_args(&["bal", "expenses", "--flat", "-F", "%(T);%(account);"])
}

/// Subscription-tagged transactions over the trailing year, by payee
pub fn subscriptions_args() -> Vec<String> {
    let start = year_ago_date();
    to_args(&[
        "reg",
        "-b",
        &start,
        "--by-payee",
        "--format",
        "%P;%(abs(display_amount));",
        "%subscription",
    ])
}

/// Largest expense payees over the trailing year, sorted and totalled
/// by ledger itself
pub fn top_payees_args() -> Vec<String> {
    let start = year_ago_date();
    let head = TOP_PAYEE_COUNT.to_string();
    to_args(&[
        "reg",
        "-b",
        &start,
        "--by-payee",
        "-S",
        "-T",
        "--head",
        &head,
        "--format",
        "%P;%(abs(display_amount));",
        "^Expenses",
    ])
}

/// Running market-value total of one top-level account over the trailing year
pub fn account_total_args(account: &str) -> Vec<String> {
    let start = year_ago_date();
    to_args(&[
        "reg",
        account,
        "-b",
        &start,
        "-V",
        "-n",
        "-F",
        "%(date);%(T);",
    ])
}
