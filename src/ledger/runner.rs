//! Subprocess runner for the ledger tool
//!
//! One external process per query, fully blocking, no retries and no
//! timeout. The trait exists so tests (and any future data source) can
//! substitute canned text for the real binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DashboardError, DashboardResult};

/// Source of ledger report output
///
/// Implementations take the report arguments (everything after the journal
/// file selection) and return the decoded standard output.
pub trait LedgerSource {
    /// Run one report query and return its stdout as text
    fn run(&self, args: &[String]) -> DashboardResult<String>;
}

/// Runs reports through the real `ledger` command-line tool
#[derive(Debug, Clone)]
pub struct LedgerCli {
    /// Binary to invoke (usually just "ledger")
    binary: PathBuf,
    /// Journal file passed via `-f`
    ledger_file: PathBuf,
}

impl LedgerCli {
    /// Create a runner for the given binary and journal file
    pub fn new(binary: impl Into<PathBuf>, ledger_file: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            ledger_file: ledger_file.into(),
        }
    }

    /// The journal file this runner queries
    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }
}

impl LedgerSource for LedgerCli {
    fn run(&self, args: &[String]) -> DashboardResult<String> {
        let output = Command::new(&self.binary)
            .arg("-f")
            .arg(&self.ledger_file)
            .args(args)
            .output()?;

        if !output.status.success() {
            return Err(DashboardError::CommandFailed {
                // Killed by signal leaves no code; report -1 like a shell would
                code: output.status.code().unwrap_or(-1),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if stdout.is_empty() {
            return Err(DashboardError::EmptyOutput);
        }

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `false -f <file> <args>` ignores its arguments and exits 1; `true`
    // exits 0 with no output. Both are enough to exercise the status and
    // empty-stdout checks without a real ledger install.

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_is_command_failed() {
        let runner = LedgerCli::new("false", "/dev/null");
        let err = runner.run(&["reg".to_string()]).unwrap_err();
        match err {
            DashboardError::CommandFailed { code } => assert_eq!(code, 1),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_empty_stdout_is_empty_output() {
        let runner = LedgerCli::new("true", "/dev/null");
        let err = runner.run(&["reg".to_string()]).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyOutput));
    }

    #[test]
    #[cfg(unix)]
    fn test_stdout_is_captured() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-ledger");
        let mut file = std::fs::File::create(&script).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();
        writeln!(file, "printf '%s' '2023/01/01;$1,234.56;'").unwrap();
        drop(file);
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let runner = LedgerCli::new(&script, "/dev/null");
        let out = runner.run(&["reg".to_string()]).unwrap();
        assert_eq!(out, "2023/01/01;$1,234.56;");
    }

    #[test]
    fn test_missing_binary_is_io_error() {
        let runner = LedgerCli::new("/nonexistent/ledger-binary", "/dev/null");
        let err = runner.run(&[]).unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
