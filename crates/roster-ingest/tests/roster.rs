//! Integration tests for typed roster readers and artifact writers.

use roster_ingest::{read_baseline, read_csv_table, read_roster, write_change_set};
use roster_model::{Action, ChangeRecord, RosterError};

const ROSTER_HEADER: &str = "Employee Number,First Name,Last Name,Username,Email,Building,Hire Date,Term Date,Password";

#[test]
fn reads_roster_rows_by_column_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster_export.csv");
    // Column order differs from the canonical schema on purpose.
    std::fs::write(
        &path,
        "Password,Employee Number,First Name,Last Name,Username,Email,Building,Hire Date,Term Date\n\
         1234567,1001,Jane,Doe,jane.doe,jane.doe@example.com,HQ,2024-02-15 08:00:00,\n",
    )
    .expect("write fixture");

    let rows = read_roster(&path).expect("read roster");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].row, 1);
    assert_eq!(rows[0].employee_number, "1001");
    assert_eq!(rows[0].password, "1234567");
    assert_eq!(rows[0].hire_date, "2024-02-15 08:00:00");
    assert_eq!(rows[0].term_date, "");
}

#[test]
fn missing_roster_column_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster_export.csv");
    std::fs::write(
        &path,
        "Employee Number,First Name,Last Name,Username,Email,Building,Hire Date,Term Date\n",
    )
    .expect("write fixture");

    let error = read_roster(&path).expect_err("password column is required");
    match error {
        RosterError::MissingColumn { column, .. } => assert_eq!(column, "Password"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn baseline_reader_does_not_expect_date_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster_base.csv");
    std::fs::write(
        &path,
        "Employee Number,First Name,Last Name,Username,Email,Building,Password\n\
         1001,Jane,Doe,janedoe,janedoe@example.com,HQ,01234567\n",
    )
    .expect("write fixture");

    let rows = read_baseline(&path).expect("read baseline");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].password, "01234567");
}

#[test]
fn change_set_preserves_leading_zeros_and_blanks_cleared_credentials() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster_20240301.csv");
    let records = vec![
        ChangeRecord {
            employee_number: "1001".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: "janedoe".to_string(),
            email: "janedoe@example.com".to_string(),
            building: "HQ".to_string(),
            password: Some("01234567".to_string()),
            action: Action::Add,
        },
        ChangeRecord {
            employee_number: "1002".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            username: "jsmith".to_string(),
            email: "jsmith@example.com".to_string(),
            building: "Annex".to_string(),
            password: None,
            action: Action::Update,
        },
    ];

    write_change_set(&path, &records).expect("write change set");

    let table = read_csv_table(&path).expect("re-read change set");
    assert_eq!(
        table.headers,
        vec![
            "Employee Number",
            "First Name",
            "Last Name",
            "Username",
            "Email",
            "Building",
            "Password",
            "Action",
        ]
    );
    assert_eq!(table.rows[0][6], "01234567");
    assert_eq!(table.rows[0][7], "A");
    assert_eq!(table.rows[1][6], "");
    assert_eq!(table.rows[1][7], "U");
}

#[test]
fn roster_header_constant_matches_reader_expectations() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster_export.csv");
    std::fs::write(&path, format!("{ROSTER_HEADER}\n")).expect("write fixture");
    let rows = read_roster(&path).expect("empty roster reads cleanly");
    assert!(rows.is_empty());
}
