//! External tool boundary
//!
//! Everything that touches the `ledger` binary lives here: the subprocess
//! runner, the record parser for its semicolon-delimited report output, and
//! the argument vectors for the reports the dashboard needs.

pub mod parse;
pub mod query;
pub mod runner;

pub use parse::{parse_amount, parse_records, strip_currency};
pub use runner::{LedgerCli, LedgerSource};
