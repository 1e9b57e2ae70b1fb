//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The dashboard data itself is collected once before the TUI starts and is
//! never mutated; the only mutable state is scroll position and focus.

use std::path::Path;

use crate::config::ChartStyle;
use crate::metrics::Dashboard;

/// Which stat list currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedList {
    #[default]
    Subscriptions,
    Payees,
}

/// Main application state
pub struct App<'a> {
    /// The collected dashboard data
    pub dashboard: &'a Dashboard,

    /// Chart style configuration
    pub style: &'a ChartStyle,

    /// Journal file shown in the status bar
    pub ledger_file: &'a Path,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which stat list has focus
    pub focused_list: FocusedList,

    /// Scroll offset into the subscriptions list
    pub subscriptions_scroll: usize,

    /// Scroll offset into the top payees list
    pub payees_scroll: usize,
}

impl<'a> App<'a> {
    /// Create the app state around collected dashboard data
    pub fn new(dashboard: &'a Dashboard, style: &'a ChartStyle, ledger_file: &'a Path) -> Self {
        Self {
            dashboard,
            style,
            ledger_file,
            should_quit: false,
            focused_list: FocusedList::default(),
            subscriptions_scroll: 0,
            payees_scroll: 0,
        }
    }

    /// Signal the main loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move focus to the other stat list
    pub fn toggle_list_focus(&mut self) {
        self.focused_list = match self.focused_list {
            FocusedList::Subscriptions => FocusedList::Payees,
            FocusedList::Payees => FocusedList::Subscriptions,
        };
    }

    /// Scroll the focused list down one row
    pub fn scroll_down(&mut self) {
        let (offset, len) = self.focused_scroll();
        if *offset + 1 < len {
            *offset += 1;
        }
    }

    /// Scroll the focused list up one row
    pub fn scroll_up(&mut self) {
        let (offset, _) = self.focused_scroll();
        *offset = offset.saturating_sub(1);
    }

    fn focused_scroll(&mut self) -> (&mut usize, usize) {
        match self.focused_list {
            FocusedList::Subscriptions => (
                &mut self.subscriptions_scroll,
                self.dashboard.subscriptions.len(),
            ),
            FocusedList::Payees => (&mut self.payees_scroll, self.dashboard.top_payees.len()),
        }
    }
}
