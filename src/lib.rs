//! ledgerdash - Terminal dashboard for plain-text accounting
//!
//! This library provides the core functionality for the ledgerdash terminal
//! dashboard. It shells out to the `ledger` command-line tool, parses its
//! semicolon-delimited report output into typed numeric series, and renders
//! the results as stat cards and charts in a TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Chart style configuration
//! - `error`: Custom error types
//! - `ledger`: External tool boundary (runner, record parser, report queries)
//! - `metrics`: Metric extractors (net worth, expenses, subscriptions,
//!   top payees, savings rate)
//! - `charts`: Pure chart models consumed by the TUI views
//! - `display`: Plain-text rendering for the `report` subcommand
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerdash::ledger::LedgerCli;
//! use ledgerdash::metrics::Dashboard;
//!
//! let source = LedgerCli::new("ledger", "/path/to/journal.ledger");
//! let dashboard = Dashboard::collect(&source)?;
//! ```

pub mod charts;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod tui;

pub use error::{DashboardError, DashboardResult};
