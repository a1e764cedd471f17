//! Budget Ledger CLI
//!
//! Command-line front end: builds a session, optionally imports and exports
//! transactions, and prints the dashboard.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --language tr --currency TRY
//! cargo run -- --no-sample --budget-limit 2500 transactions.csv
//! cargo run -- --export-dir ./out
//! ```
//!
//! Without `--no-sample` the ledger starts with six sample transactions.
//! Imported rows that fail validation are skipped and logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid budget limit, input file not found, export failed, etc.)

use budget_ledger::{cli, dashboard, logging};
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    logging::init(&args.log_level);

    let mut output = std::io::stdout();
    if let Err(e) = dashboard::run(&args, &mut output) {
        error!(error = %e, "session failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
