//! Chart models
//!
//! Pure, renderer-independent descriptions of the two dashboard charts. The
//! TUI views turn these into ratatui widgets; keeping the numeric work here
//! (axis bounds, unit scaling, label truncation) makes it testable without a
//! terminal.

pub mod expenses;
pub mod net_worth;

pub use expenses::{truncate_label, ExpenseBar, ExpenseChart};
pub use net_worth::NetWorthChart;
