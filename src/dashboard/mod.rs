//! Dashboard state and the top-level run loop
//!
//! The `Dashboard` is the single state container of a session: the user
//! profile, the ledger and the display language. Everything the presentation
//! needs is derived from it on demand.
//!
//! # Flow
//!
//! 1. Build the profile from CLI arguments
//! 2. Seed the ledger with the sample transactions (unless disabled)
//! 3. Import any input file, skipping rows that fail validation
//! 4. Optionally export to `budget-transactions.csv`
//! 5. Render the text dashboard to the output

mod render;

use crate::cli::CliArgs;
use crate::core::{monthly_trend, ClockIds, IdGenerator, Ledger, LedgerSummary, MonthlyPoint};
use crate::io::{write_transactions_csv, SyncReader, EXPORT_FILE_NAME};
use crate::sample::sample_ledger;
use crate::types::{LedgerError, Language, Transaction, TransactionDraft, TransactionId, UserProfile};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Session state: profile, ledger and language
#[derive(Debug, Clone)]
pub struct Dashboard<G = ClockIds> {
    profile: UserProfile,
    ledger: Ledger<G>,
    language: Language,
}

impl Dashboard<ClockIds> {
    /// Dashboard with an empty ledger
    pub fn new(profile: UserProfile, language: Language) -> Self {
        Self::with_ledger(profile, Ledger::new(), language)
    }
}

impl<G: IdGenerator> Dashboard<G> {
    pub fn with_ledger(profile: UserProfile, ledger: Ledger<G>, language: Language) -> Self {
        Dashboard {
            profile,
            ledger,
            language,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn ledger(&self) -> &Ledger<G> {
        &self.ledger
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn add(&mut self, draft: &TransactionDraft) -> Result<TransactionId, LedgerError> {
        self.ledger.add(draft)
    }

    pub fn update(&mut self, id: TransactionId, draft: &TransactionDraft) -> Result<(), LedgerError> {
        self.ledger.update(id, draft)
    }

    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        self.ledger.delete(id)
    }

    /// Current derived metrics
    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary(self.profile.budget_limit())
    }

    /// Monthly trend ending with the current totals
    pub fn trend(&self) -> Vec<MonthlyPoint> {
        monthly_trend(&self.summary())
    }

    /// Import every row of a CSV file
    ///
    /// Rows that fail to parse or validate are logged and skipped.
    ///
    /// # Errors
    ///
    /// Only fatal errors opening the file are returned.
    pub fn import(&mut self, path: &Path) -> Result<ImportReport, LedgerError> {
        let reader = SyncReader::new(path)?;
        let mut report = ImportReport::default();

        for (row, result) in reader.enumerate() {
            match result.and_then(|draft| self.ledger.add(&draft)) {
                Ok(_) => report.imported += 1,
                Err(e) => {
                    warn!(row = row + 1, error = %e, "skipping import row");
                    report.skipped += 1;
                }
            }
        }

        info!(
            imported = report.imported,
            skipped = report.skipped,
            path = %path.display(),
            "import finished"
        );
        Ok(report)
    }

    /// Write the export CSV to `output`
    pub fn export_csv(&self, output: &mut dyn Write) -> Result<(), LedgerError> {
        write_transactions_csv(self.ledger.transactions(), self.language, output)
    }

    /// Write `budget-transactions.csv` into `dir`, returning the file path
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, LedgerError> {
        let path = dir.join(EXPORT_FILE_NAME);
        let mut file = BufWriter::new(File::create(&path)?);
        self.export_csv(&mut file)?;
        file.flush()?;

        info!(
            path = %path.display(),
            transactions = self.ledger.len(),
            "exported transactions"
        );
        Ok(path)
    }

    /// Render the text dashboard
    pub fn render(&self, output: &mut dyn Write) -> Result<(), LedgerError> {
        render::render_dashboard(self, output)
    }
}

/// Run a session from command-line arguments, writing the dashboard to `output`
///
/// # Errors
///
/// Fatal errors only: an invalid profile, an unreadable input file, or a
/// failed export or write.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), LedgerError> {
    let profile = args.to_profile()?;
    let ledger = if args.no_sample {
        Ledger::new()
    } else {
        sample_ledger()?
    };
    let mut dashboard = Dashboard::with_ledger(profile, ledger, args.language);

    if let Some(input) = &args.input_file {
        dashboard.import(input)?;
    }

    if let Some(dir) = &args.export_dir {
        dashboard.export_to_dir(dir)?;
    }

    dashboard.render(output)
}
