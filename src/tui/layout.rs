//! Layout definitions for the TUI
//!
//! One screen: a stats row spanning the full width, two chart cards side by
//! side below it, and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// Stats row (savings rate, subscriptions, top payees)
    pub stats: Rect,
    /// Net worth chart card
    pub net_worth: Rect,
    /// Expense bar chart card
    pub expenses: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35), // Stats row
                Constraint::Min(10),        // Chart row
                Constraint::Length(1),      // Status bar
            ])
            .split(area);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        Self {
            stats: vertical[0],
            net_worth: charts[0],
            expenses: charts[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the stats row
pub struct StatsLayout {
    /// Savings rate card
    pub savings: Rect,
    /// Subscriptions list card
    pub subscriptions: Rect,
    /// Top payees list card
    pub payees: Rect,
}

impl StatsLayout {
    /// Calculate stats row layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        Self {
            savings: chunks[0],
            subscriptions: chunks[1],
            payees: chunks[2],
        }
    }
}
