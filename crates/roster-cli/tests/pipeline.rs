//! End-to-end tests for the reconciliation pass.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use roster_cli::cli::RunArgs;
use roster_cli::commands::run_pass;
use roster_cli::types::FetchOutcome;
use roster_ingest::read_csv_table;

const BASELINE: &str = "\
Employee Number,First Name,Last Name,Username,Email,Building,Password
1001,Jane,Doe,jane.doe,jane.doe@example.com,HQ,01234567
1002,John,Smith,jsmith,jsmith@example.com,HQ,11223344
1003,Ann,Lee,alee,alee@example.com,Annex,55667788
";

const INCOMING: &str = "\
Employee Number,First Name,Last Name,Username,Email,Building,Hire Date,Term Date,Password
1001,Jane,Doe,jane.doe,jane.doe@example.com,Annex,2020-05-01 00:00:00,,1234567
1002,John,Smith,jsmith,jsmith@example.com,HQ,2019-01-15 00:00:00,,11223344
1003,Ann,Lee,alee,alee@example.com,Annex,2018-03-02 00:00:00,2024-02-10 08:00:00,55667788
1004,New,Person,new.person,new.person@example.com,HQ,2024-02-15 09:00:00,,7654321
1005,Quiet,Joiner,qjoiner,qjoiner@example.com,HQ,2023-12-01 00:00:00,,99887766
";

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

fn args(data_dir: &Path) -> RunArgs {
    RunArgs {
        data_dir: data_dir.to_path_buf(),
        config: None,
        output_dir: None,
        as_of: Some(as_of()),
        dry_run: false,
        no_fetch: false,
    }
}

fn seed(dir: &Path) {
    fs::write(dir.join("roster_base.csv"), BASELINE).expect("seed baseline");
    fs::write(dir.join("roster_export.csv"), INCOMING).expect("seed export");
}

#[test]
fn full_pass_produces_change_set_backup_and_new_baseline() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed(dir.path());

    let result = run_pass(&args(dir.path())).expect("pass succeeds");

    assert_eq!(result.counts.adds, 1);
    assert_eq!(result.counts.terminations, 1);
    assert_eq!(result.counts.updates, 1);
    assert_eq!(result.counts.unchanged, 2);
    assert_eq!(result.change_rows, 3);
    assert_eq!(result.fetch, FetchOutcome::Skipped);
    assert_eq!(result.window.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(result.window.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

    // Change-set: named with the pass date, rows in incoming order.
    let change_path = result.change_set_path.clone().expect("change-set written");
    assert_eq!(
        change_path,
        dir.path().join("roster_20240315.csv")
    );
    let change = read_csv_table(&change_path).expect("read change-set");
    assert_eq!(change.headers.last().map(String::as_str), Some("Action"));
    assert_eq!(change.rows.len(), 3);
    assert_eq!(change.rows[0][0], "1001");
    assert_eq!(change.rows[0][7], "U");
    // Updates force a credential reset downstream.
    assert_eq!(change.rows[0][6], "");
    assert_eq!(change.rows[1][0], "1003");
    assert_eq!(change.rows[1][7], "T");
    assert_eq!(change.rows[2][0], "1004");
    assert_eq!(change.rows[2][7], "A");
    // 7-digit credential padded, leading zero preserved through CSV.
    assert_eq!(change.rows[2][6], "07654321");

    // Backup: byte-identical copy of the pre-replacement baseline.
    let backup = result.backup_path.clone().expect("backup written");
    assert_eq!(backup, dir.path().join("roster_base_20240315.csv"));
    assert_eq!(fs::read_to_string(&backup).expect("read backup"), BASELINE);

    // New baseline: all incoming rows, no date columns, normalized values.
    let baseline = read_csv_table(&result.baseline_path).expect("read baseline");
    assert_eq!(
        baseline.headers,
        vec![
            "Employee Number",
            "First Name",
            "Last Name",
            "Username",
            "Email",
            "Building",
            "Password",
        ]
    );
    assert_eq!(baseline.rows.len(), 5);
    let updated = baseline
        .rows
        .iter()
        .find(|row| row[0] == "1001")
        .expect("1001 present");
    assert_eq!(updated[5], "Annex");
    assert_eq!(updated[6], "01234567");
    assert!(baseline.rows.iter().any(|row| row[0] == "1005"));
}

#[test]
fn rerun_within_the_same_month_is_idempotent() {
    let first_dir = tempfile::tempdir().expect("tempdir");
    let second_dir = tempfile::tempdir().expect("tempdir");
    seed(first_dir.path());
    seed(second_dir.path());

    let mut late = args(second_dir.path());
    late.as_of = NaiveDate::from_ymd_opt(2024, 3, 31);

    let first = run_pass(&args(first_dir.path())).expect("first pass");
    let second = run_pass(&late).expect("second pass");

    assert_eq!(first.window, second.window);
    assert_eq!(first.counts, second.counts);
    let first_rows = read_csv_table(&first.change_set_path.unwrap()).unwrap().rows;
    let second_rows = read_csv_table(&second.change_set_path.unwrap()).unwrap().rows;
    assert_eq!(first_rows, second_rows);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed(dir.path());

    let mut run = args(dir.path());
    run.dry_run = true;
    let result = run_pass(&run).expect("dry run succeeds");

    assert_eq!(result.change_rows, 3);
    assert!(result.change_set_path.is_none());
    assert!(result.backup_path.is_none());
    assert!(!dir.path().join("roster_20240315.csv").exists());
    assert!(!dir.path().join("roster_base_20240315.csv").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("roster_base.csv")).expect("read baseline"),
        BASELINE
    );
}

#[test]
fn missing_column_aborts_the_pass() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("roster_base.csv"), BASELINE).expect("seed baseline");
    fs::write(
        dir.path().join("roster_export.csv"),
        "Employee Number,First Name,Last Name,Username,Email,Building,Hire Date,Term Date\n",
    )
    .expect("seed export");

    let error = run_pass(&args(dir.path())).expect_err("schema failure is fatal");
    assert!(format!("{error:#}").contains("Password"));
}

#[test]
fn malformed_date_aborts_the_pass() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("roster_base.csv"), BASELINE).expect("seed baseline");
    fs::write(
        dir.path().join("roster_export.csv"),
        "Employee Number,First Name,Last Name,Username,Email,Building,Hire Date,Term Date,Password\n\
         1001,Jane,Doe,jane.doe,jane.doe@example.com,HQ,05/01/2020,,01234567\n",
    )
    .expect("seed export");

    let error = run_pass(&args(dir.path())).expect_err("format failure is fatal");
    let rendered = format!("{error:#}");
    assert!(rendered.contains("Hire Date"), "unexpected error: {rendered}");
    // Nothing was written before the failure surfaced.
    assert!(!dir.path().join("roster_20240315.csv").exists());
}

fn write_fetch_config(dir: &Path, source_dir: &Path, file_name: &str, max_retries: u32) -> PathBuf {
    let config = serde_json::json!({
        "fetch": {
            "source_dir": source_dir,
            "file_name": file_name,
            "max_retries": max_retries,
            "retry_delay_secs": 0,
        }
    });
    let path = dir.join("roster-recon.json");
    fs::write(&path, config.to_string()).expect("write config");
    path
}

#[test]
fn fetch_stage_retrieves_and_normalizes_the_export() {
    let remote = tempfile::tempdir().expect("remote dir");
    let dir = tempfile::tempdir().expect("data dir");
    fs::write(dir.path().join("roster_base.csv"), BASELINE).expect("seed baseline");
    fs::write(remote.path().join("roster_export-en.csv"), INCOMING).expect("seed remote");
    write_fetch_config(dir.path(), remote.path(), "roster_export-en.csv", 2);

    let result = run_pass(&args(dir.path())).expect("pass succeeds");

    let fetched = dir.path().join("roster_export.csv");
    assert_eq!(result.fetch, FetchOutcome::Fetched(fetched.clone()));
    assert!(fetched.exists());
    assert_eq!(result.change_rows, 3);
}

#[test]
fn fetch_exhaustion_falls_back_to_the_local_export() {
    let remote = tempfile::tempdir().expect("empty remote dir");
    let dir = tempfile::tempdir().expect("data dir");
    seed(dir.path());
    write_fetch_config(dir.path(), remote.path(), "roster_export-en.csv", 1);

    let result = run_pass(&args(dir.path())).expect("pass proceeds on local file");
    assert_eq!(result.fetch, FetchOutcome::FailedUsingLocal);
    assert_eq!(result.change_rows, 3);
}

#[test]
fn fetch_exhaustion_without_a_local_export_is_fatal() {
    let remote = tempfile::tempdir().expect("empty remote dir");
    let dir = tempfile::tempdir().expect("data dir");
    fs::write(dir.path().join("roster_base.csv"), BASELINE).expect("seed baseline");
    write_fetch_config(dir.path(), remote.path(), "roster_export-en.csv", 1);

    let error = run_pass(&args(dir.path())).expect_err("nothing to process");
    assert!(format!("{error:#}").contains("fetch"));
}

#[test]
fn no_fetch_flag_skips_a_configured_fetch() {
    let remote = tempfile::tempdir().expect("remote dir");
    let dir = tempfile::tempdir().expect("data dir");
    seed(dir.path());
    fs::write(remote.path().join("roster_export-en.csv"), "unused").expect("seed remote");
    write_fetch_config(dir.path(), remote.path(), "roster_export-en.csv", 2);

    let mut run = args(dir.path());
    run.no_fetch = true;
    let result = run_pass(&run).expect("pass succeeds");
    assert_eq!(result.fetch, FetchOutcome::Skipped);
}
