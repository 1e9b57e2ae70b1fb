//! Expense bar chart model
//!
//! One horizontal bar per top-level expense category, values already in
//! thousands from the extractor.

use crate::metrics::ExpenseBreakdown;

/// Longest category label drawn untruncated
const LABEL_WIDTH: usize = 5;

/// One bar of the expense chart
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBar {
    /// Truncated category label
    pub label: String,
    /// Amount in thousands
    pub amount_k: f64,
}

/// Renderable model of the expense bar chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseChart {
    bars: Vec<ExpenseBar>,
}

impl ExpenseChart {
    /// Build the chart model from an expense breakdown
    pub fn build(breakdown: &ExpenseBreakdown) -> Self {
        let bars = breakdown
            .iter()
            .map(|(category, amount_k)| ExpenseBar {
                label: truncate_label(category),
                amount_k,
            })
            .collect();
        Self { bars }
    }

    /// The bars, one per category
    pub fn bars(&self) -> &[ExpenseBar] {
        &self.bars
    }

    /// Largest bar value, or zero when empty
    pub fn max_amount(&self) -> f64 {
        self.bars.iter().map(|b| b.amount_k).fold(0.0, f64::max)
    }
}

/// Truncate a category name for bar labels
///
/// Names longer than five characters become exactly five characters plus a
/// trailing period; shorter names pass through unchanged. Counted in
/// characters, not bytes.
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() > LABEL_WIDTH {
        let mut label: String = name.chars().take(LABEL_WIDTH).collect();
        label.push('.');
        label
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::testing::ScriptedLedger;
    use crate::metrics::expense_breakdown;

    #[test]
    fn test_truncate_label_long() {
        assert_eq!(truncate_label("Groceries"), "Groce.");
        assert_eq!(truncate_label("Entertainment"), "Enter.");
    }

    #[test]
    fn test_truncate_label_short_unchanged() {
        assert_eq!(truncate_label("Food"), "Food");
        assert_eq!(truncate_label("Rent!"), "Rent!");
    }

    #[test]
    fn test_truncate_label_counts_characters_not_bytes() {
        assert_eq!(truncate_label("Crèche-fees"), "Crèch.");
    }

    #[test]
    fn test_build_from_breakdown() {
        let source =
            ScriptedLedger::with_output("$500;Expenses:Groceries;$250;Expenses:Rent;");
        let breakdown = expense_breakdown(&source).unwrap();
        let chart = ExpenseChart::build(&breakdown);

        assert_eq!(chart.bars().len(), 2);
        assert_eq!(chart.bars()[0].label, "Groce.");
        assert_eq!(chart.bars()[0].amount_k, 0.5);
        assert_eq!(chart.bars()[1].label, "Rent");
        assert_eq!(chart.max_amount(), 0.5);
    }
}
