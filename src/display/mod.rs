//! Plain-text rendering for the `report` subcommand
//!
//! Prints the same data the TUI shows, formatted for a pipe or a plain
//! terminal: the savings rate with its pass/fail mark, subscription and
//! top-payee columns, expense categories as unicode bars, and a net worth
//! summary.

use crate::charts::{ExpenseChart, NetWorthChart};
use crate::metrics::{meets_target, Dashboard, NamedAmounts, SAVINGS_RATE_TARGET};

const REPORT_WIDTH: usize = 46;
const BAR_WIDTH: usize = 20;

/// Render the full dashboard as text
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let mut output = String::new();

    output.push_str("Financial Report\n");
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');

    // Savings rate
    let mark = if meets_target(dashboard.savings_rate) {
        '✓'
    } else {
        '✗'
    };
    output.push_str(&format!(
        "Savings Rate: {} {} (target {:.0}%)\n\n",
        format_rate(dashboard.savings_rate),
        mark,
        SAVINGS_RATE_TARGET
    ));

    // Subscriptions
    output.push_str("Subscriptions\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_list(&dashboard.subscriptions));
    output.push('\n');

    // Top payees
    output.push_str("Top Payees\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_list(&dashboard.top_payees));
    output.push('\n');

    // Expense balances
    output.push_str("Expense Balances ($K)\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    let chart = ExpenseChart::build(&dashboard.expenses);
    let max = chart.max_amount();
    for bar in chart.bars() {
        output.push_str(&format!(
            "{:<6} {} {:>8.2}\n",
            bar.label,
            format_bar(bar.amount_k, max, BAR_WIDTH),
            bar.amount_k
        ));
    }
    output.push('\n');

    // Net worth
    output.push_str("Net Worth ($K)\n");
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_net_worth(dashboard));

    output
}

/// Format the savings rate, with the undefined sentinel spelled out
fn format_rate(rate: f64) -> String {
    if rate == f64::NEG_INFINITY {
        "n/a (no income)".to_string()
    } else {
        format!("{rate:.0}%")
    }
}

/// Format a name/amount list as two columns
fn format_list(list: &NamedAmounts) -> String {
    let mut output = String::new();
    for (name, amount) in list.iter() {
        output.push_str(&format!("{:<30} {:>10.2}\n", name, amount));
    }
    output
}

/// Net worth summary: first, latest, minimum, maximum
fn format_net_worth(dashboard: &Dashboard) -> String {
    let chart = NetWorthChart::build(&dashboard.net_worth);
    let mut output = String::new();

    if let (Some(first), Some(last)) = (dashboard.net_worth.first(), dashboard.net_worth.last()) {
        output.push_str(&format!(
            "{}: {:>8.2}   latest {}: {:>8.2}\n",
            first.date,
            first.amount / 1000.0,
            last.date,
            last.amount / 1000.0
        ));
    }

    let min = chart
        .points()
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::INFINITY, f64::min);
    let max = chart.points().iter().map(|&(_, y)| y).fold(0.0, f64::max);
    if min.is_finite() {
        output.push_str(&format!("min {min:>8.2}   max {max:>8.2}\n"));
    }

    output
}

/// Create a simple bar representation
fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
