use std::path::{Path, PathBuf};
use std::process::exit;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgerdash::config::ChartStyle;
use ledgerdash::ledger::LedgerCli;
use ledgerdash::metrics::Dashboard;

#[derive(Parser)]
#[command(
    name = "ledgerdash",
    author = "Kaylee Beyene",
    version,
    about = "Terminal dashboard for plain-text accounting",
    long_about = "ledgerdash renders a personal-finance dashboard for a ledger \
                  journal: net worth over time, expense balances by category, \
                  subscriptions, top payees and your savings rate, all computed \
                  by the ledger tool itself and drawn in the terminal."
)]
struct Cli {
    /// Path to the ledger journal file
    ledger_file: Option<PathBuf>,

    /// Ledger binary to invoke
    #[arg(long, default_value = "ledger", env = "LEDGERDASH_LEDGER_BIN")]
    ledger_bin: String,

    /// Chart style file (JSON)
    #[arg(long)]
    style: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the dashboard as plain text
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(ledger_file) = cli.ledger_file else {
        eprintln!("Error: No ledger file specified");
        eprintln!("Usage: ledgerdash <ledger_file>");
        exit(1);
    };
    let ledger_file = validate_ledger_file(&ledger_file);

    let style = match &cli.style {
        Some(path) => match ChartStyle::load(path) {
            Ok(style) => style,
            Err(err) => {
                eprintln!("Error: {err}");
                exit(1);
            }
        },
        None => ChartStyle::default(),
    };

    let source = LedgerCli::new(&cli.ledger_bin, &ledger_file);
    let dashboard = Dashboard::collect(&source)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            ledgerdash::tui::run_tui(&dashboard, &style, &ledger_file)?;
        }
        Commands::Report => {
            print!("{}", ledgerdash::display::format_dashboard(&dashboard));
        }
    }

    Ok(())
}

/// Validate and resolve the journal path, exiting with status 1 on failure
fn validate_ledger_file(path: &Path) -> PathBuf {
    if !path.exists() {
        eprintln!("Error: File does not exist: {}", path.display());
        exit(1);
    }

    // Resolve symlinks to the actual file path
    let resolved = match path.canonicalize() {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("Error: Invalid file path: {err}");
            exit(1);
        }
    };

    if !resolved.is_file() {
        eprintln!("Error: Path is not a regular file: {}", resolved.display());
        exit(1);
    }

    if let Err(err) = std::fs::File::open(&resolved) {
        eprintln!("Error: File is not readable: {} ({err})", resolved.display());
        exit(1);
    }

    resolved
}
