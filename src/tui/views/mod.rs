//! TUI Views module
//!
//! Contains the stat cards, the two chart cards, and the status bar.

pub mod charts;
pub mod stats;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::DashboardLayout;

/// The two chart cards on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    NetWorth,
    Expenses,
}

impl ChartKind {
    /// Header text shown on the card
    pub fn header(self) -> &'static str {
        match self {
            ChartKind::NetWorth => "Net Worth Over Time",
            ChartKind::Expenses => "Expense Balances",
        }
    }
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = DashboardLayout::new(frame.area());

    stats::render(frame, app, layout.stats);
    charts::render(frame, app, ChartKind::NetWorth, layout.net_worth);
    charts::render(frame, app, ChartKind::Expenses, layout.expenses);
    status_bar::render(frame, app, layout.status_bar);
}
