//! Custom error types for ledgerdash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledgerdash operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The ledger tool exited with a non-zero status
    #[error(
        "Ledger command failed with exit code {code}. \
         Please check your ledger file syntax."
    )]
    CommandFailed {
        /// Exit code reported by the subprocess
        code: i32,
    },

    /// The ledger tool exited successfully but produced no output
    #[error(
        "Ledger command returned no data. \
         Please verify your ledger file contains valid transactions."
    )]
    EmptyOutput,

    /// The ledger output contained no usable records after filtering
    #[error(
        "Ledger command returned empty data. \
         Please verify your ledger file has matching transactions."
    )]
    EmptyData,

    /// A numeric or date token could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// File or subprocess I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Chart style configuration errors
    #[error("Style error: {0}")]
    Style(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl DashboardError {
    /// Create a parse error for a malformed amount token
    pub fn bad_amount(token: impl AsRef<str>) -> Self {
        Self::Parse(format!("invalid amount: '{}'", token.as_ref()))
    }

    /// Create a parse error for a malformed date token
    pub fn bad_date(token: impl AsRef<str>) -> Self {
        Self::Parse(format!("invalid date: '{}'", token.as_ref()))
    }

    /// Check if this error means the ledger produced nothing usable
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::EmptyOutput | Self::EmptyData)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Style(err.to_string())
    }
}

/// Result type alias for ledgerdash operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_mentions_syntax() {
        let err = DashboardError::CommandFailed { code: 1 };
        assert!(err.to_string().contains("exit code 1"));
        assert!(err.to_string().contains("ledger file syntax"));
    }

    #[test]
    fn test_empty_errors_mention_transactions() {
        assert!(DashboardError::EmptyOutput
            .to_string()
            .contains("valid transactions"));
        assert!(DashboardError::EmptyData
            .to_string()
            .contains("matching transactions"));
    }

    #[test]
    fn test_is_empty() {
        assert!(DashboardError::EmptyOutput.is_empty());
        assert!(DashboardError::EmptyData.is_empty());
        assert!(!DashboardError::CommandFailed { code: 2 }.is_empty());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DashboardError = io_err.into();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
