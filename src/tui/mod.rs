//! Terminal user interface
//!
//! One-screen dashboard: a stats row (savings rate, subscriptions, top
//! payees) over two chart cards (net worth, expense balances), with a
//! key-hint status bar at the bottom.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use terminal::run_tui;
