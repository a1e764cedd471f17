use crate::sample::SAMPLE_BUDGET_LIMIT;
use crate::types::{CurrencyCode, LedgerError, Language, UserProfile};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Record income and expenses and summarize them against a budget
#[derive(Parser, Debug)]
#[command(name = "budget-ledger")]
#[command(about = "Record income and expenses and summarize them against a budget", long_about = None)]
pub struct CliArgs {
    /// Optional CSV file of transactions to import
    #[arg(
        value_name = "INPUT",
        help = "CSV file with columns type,amount,category,description,date"
    )]
    pub input_file: Option<PathBuf>,

    /// Monthly expense ceiling
    #[arg(
        long = "budget-limit",
        value_name = "AMOUNT",
        default_value_t = SAMPLE_BUDGET_LIMIT,
        help = "Budget limit used for the usage percentage (must be greater than zero)"
    )]
    pub budget_limit: Decimal,

    /// Display currency
    #[arg(
        long = "currency",
        value_name = "CODE",
        default_value = "TRY",
        help = "ISO 4217 currency code used for display"
    )]
    pub currency: CurrencyCode,

    /// Label language
    #[arg(
        long = "language",
        value_name = "LANG",
        default_value = "en",
        help = "Language for labels and the export header: 'en' or 'tr'"
    )]
    pub language: Language,

    #[arg(long = "name", value_name = "NAME", default_value = "Demo User")]
    pub name: String,

    #[arg(long = "email", value_name = "EMAIL", default_value = "demo@example.com")]
    pub email: String,

    /// Start from an empty ledger instead of the sample transactions
    #[arg(long = "no-sample")]
    pub no_sample: bool,

    /// Directory to write budget-transactions.csv into
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Log filter directive written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level or filter directive, e.g. 'debug' or 'budget_ledger=info'"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Build the user profile from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidBudgetLimit` if the limit is not greater than zero.
    pub fn to_profile(&self) -> Result<UserProfile, LedgerError> {
        UserProfile::new(
            self.name.clone(),
            self.email.clone(),
            self.budget_limit,
            self.currency.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_language(&["program"], Language::English)]
    #[case::explicit_english(&["program", "--language", "en"], Language::English)]
    #[case::explicit_turkish(&["program", "--language", "tr"], Language::Turkish)]
    fn test_language_parsing(#[case] args: &[&str], #[case] expected: Language) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.language, expected);
    }

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.input_file, None);
        assert_eq!(parsed.budget_limit, Decimal::new(10000, 0));
        assert_eq!(parsed.currency.as_str(), "TRY");
        assert!(!parsed.no_sample);
        assert_eq!(parsed.export_dir, None);
        assert_eq!(parsed.log_level, "warn");
    }

    #[rstest]
    #[case::input(&["program", "in.csv"], Some("in.csv"), None)]
    #[case::export_dir(&["program", "--export-dir", "out"], None, Some("out"))]
    #[case::both(&["program", "--export-dir", "out", "in.csv"], Some("in.csv"), Some("out"))]
    fn test_paths(
        #[case] args: &[&str],
        #[case] input: Option<&str>,
        #[case] export_dir: Option<&str>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, input.map(PathBuf::from));
        assert_eq!(parsed.export_dir, export_dir.map(PathBuf::from));
    }

    #[test]
    fn test_to_profile() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--budget-limit",
            "2500.50",
            "--currency",
            "usd",
            "--name",
            "Sam",
        ])
        .unwrap();

        let profile = parsed.to_profile().unwrap();
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.budget_limit(), Decimal::new(250050, 2));
        assert_eq!(profile.currency.as_str(), "USD");
    }

    #[test]
    fn test_to_profile_rejects_zero_limit() {
        let parsed = CliArgs::try_parse_from(["program", "--budget-limit", "0"]).unwrap();
        assert!(matches!(
            parsed.to_profile(),
            Err(LedgerError::InvalidBudgetLimit { .. })
        ));
    }

    #[rstest]
    #[case::invalid_language(&["program", "--language", "fr"])]
    #[case::invalid_currency(&["program", "--currency", "EURO"])]
    #[case::invalid_limit(&["program", "--budget-limit", "lots"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
