//! End-to-end integration tests
//!
//! These tests drive the ledger through its public API using predefined CSV
//! fixtures. Each fixture test:
//! 1. Imports input.csv from a fixture directory into an empty dashboard
//! 2. Exports the ledger as CSV in the fixture's language
//! 3. Compares the export with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path import and export
//! - Malformed rows that must be skipped
//! - Fields containing delimiters and quotes
//! - Amount precision in the export
//! - Turkish labels on import and in the export header

#[cfg(test)]
mod tests {
    use budget_ledger::cli::CliArgs;
    use budget_ledger::core::SequentialIds;
    use budget_ledger::dashboard::run;
    use budget_ledger::io::EXPORT_FILE_NAME;
    use budget_ledger::{
        BudgetStatus, Category, Dashboard, Language, Ledger, LedgerError, TransactionDraft,
        TransactionKind, UserProfile,
    };
    use clap::Parser;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn empty_dashboard(language: Language) -> Dashboard<SequentialIds> {
        let profile = UserProfile::new(
            "Demo User",
            "demo@example.com",
            Decimal::new(10000, 0),
            "TRY".parse().unwrap(),
        )
        .unwrap();
        Dashboard::with_ledger(
            profile,
            Ledger::with_id_generator(SequentialIds::default()),
            language,
        )
    }

    /// Import input.csv from `tests/fixtures/{fixture_name}/`, export it and
    /// compare with expected.csv
    ///
    /// # Panics
    ///
    /// Panics if a fixture file cannot be read or the export differs.
    fn run_test_fixture(fixture_name: &str, language: Language) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let mut dashboard = empty_dashboard(language);
        dashboard
            .import(Path::new(&input_path))
            .unwrap_or_else(|e| panic!("Failed to import transactions: {}", e));

        let mut output = Vec::new();
        dashboard
            .export_csv(&mut output)
            .unwrap_or_else(|e| panic!("Failed to export transactions: {}", e));
        let actual_output = String::from_utf8(output).expect("Export is not UTF-8");

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} ({:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, language, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path", Language::English)]
    #[case("malformed_data", Language::English)]
    #[case("delimiter_fields", Language::English)]
    #[case("precision", Language::English)]
    #[case("turkish_export", Language::Turkish)]
    fn test_fixtures(#[case] fixture: &str, #[case] language: Language) {
        run_test_fixture(fixture, language);
    }

    #[test]
    fn test_malformed_rows_are_counted() {
        let mut dashboard = empty_dashboard(Language::English);
        let report = dashboard
            .import(Path::new("tests/fixtures/malformed_data/input.csv"))
            .unwrap();

        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 6);
    }

    #[test]
    fn test_summary_after_import() {
        let mut dashboard = empty_dashboard(Language::English);
        dashboard
            .import(Path::new("tests/fixtures/happy_path/input.csv"))
            .unwrap();

        let summary = dashboard.summary();
        assert_eq!(summary.total_income, Decimal::new(5000, 0));
        assert_eq!(summary.total_expense, Decimal::new(2000, 0));
        assert_eq!(summary.balance, Decimal::new(3000, 0));
        assert_eq!(summary.budget_usage, Some(Decimal::new(20, 0)));
        assert_eq!(summary.status, BudgetStatus::Normal);

        let groceries = &summary.categories[0];
        assert_eq!(groceries.category, Category::Groceries);
        assert_eq!(groceries.percentage, Decimal::new(60, 0));
    }

    #[test]
    fn test_crud_session_is_reflected_in_export() {
        let mut dashboard = empty_dashboard(Language::English);
        let salary = dashboard
            .add(&TransactionDraft::new(
                TransactionKind::Income,
                "5000",
                "Salary",
                "Monthly salary",
                "2025-06-01",
            ))
            .unwrap();
        let cinema = dashboard
            .add(&TransactionDraft::new(
                TransactionKind::Expense,
                "450",
                "Entertainment",
                "Cinema",
                "2025-06-05",
            ))
            .unwrap();

        let mut edit = dashboard.ledger().draft_for(cinema).unwrap();
        edit.amount = "300".to_string();
        dashboard.update(cinema, &edit).unwrap();
        dashboard.delete(salary).unwrap();

        assert!(matches!(
            dashboard.delete(salary),
            Err(LedgerError::TransactionNotFound { .. })
        ));

        let mut output = Vec::new();
        dashboard.export_csv(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Date,Type,Category,Description,Amount\n2025-06-05,Expense,Entertainment,Cinema,300"
        );
    }

    #[test]
    fn test_run_imports_and_exports_without_sample() {
        let dir = TempDir::new().unwrap();
        let args = CliArgs::try_parse_from([
            "budget-ledger",
            "--no-sample",
            "--currency",
            "USD",
            "--export-dir",
            dir.path().to_str().unwrap(),
            "tests/fixtures/happy_path/input.csv",
        ])
        .unwrap();

        let mut output = Vec::new();
        run(&args, &mut output).unwrap();

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("$5,000.00"));
        assert!(rendered.contains("20.0%"));

        let exported = fs::read_to_string(dir.path().join(EXPORT_FILE_NAME)).unwrap();
        let expected = fs::read_to_string("tests/fixtures/happy_path/expected.csv").unwrap();
        assert_eq!(exported, expected);
        assert!(!exported.ends_with('\n'));
    }

    #[test]
    fn test_run_missing_input_is_fatal() {
        let args =
            CliArgs::try_parse_from(["budget-ledger", "tests/fixtures/missing/input.csv"]).unwrap();
        let mut output = Vec::new();
        assert!(matches!(
            run(&args, &mut output),
            Err(LedgerError::FileNotFound { .. })
        ));
    }
}
