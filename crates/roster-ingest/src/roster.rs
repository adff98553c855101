//! Typed readers for the roster export and the stored baseline.
//!
//! Rows come back as raw strings; normalization (sentinels, credential
//! padding, date parsing) happens in `roster-core`.

use std::path::Path;

use tracing::debug;

use roster_model::schema::{
    COL_BUILDING, COL_EMAIL, COL_EMPLOYEE_NUMBER, COL_FIRST_NAME, COL_HIRE_DATE, COL_LAST_NAME,
    COL_PASSWORD, COL_TERM_DATE, COL_USERNAME,
};
use roster_model::Result;

use crate::csv_table::read_csv_table;

/// One raw row of the incoming export. `row` is the 1-based data row
/// number, kept for error reporting before records are keyed.
#[derive(Debug, Clone)]
pub struct RawEmployeeRow {
    pub row: usize,
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub building: String,
    pub hire_date: String,
    pub term_date: String,
    pub password: String,
}

/// One raw row of the stored baseline.
#[derive(Debug, Clone)]
pub struct RawBaselineRow {
    pub row: usize,
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub building: String,
    pub password: String,
}

pub fn read_roster(path: &Path) -> Result<Vec<RawEmployeeRow>> {
    let table = read_csv_table(path)?;
    let employee_number = table.require_column(COL_EMPLOYEE_NUMBER, path)?;
    let first_name = table.require_column(COL_FIRST_NAME, path)?;
    let last_name = table.require_column(COL_LAST_NAME, path)?;
    let username = table.require_column(COL_USERNAME, path)?;
    let email = table.require_column(COL_EMAIL, path)?;
    let building = table.require_column(COL_BUILDING, path)?;
    let hire_date = table.require_column(COL_HIRE_DATE, path)?;
    let term_date = table.require_column(COL_TERM_DATE, path)?;
    let password = table.require_column(COL_PASSWORD, path)?;

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| RawEmployeeRow {
            row: idx + 1,
            employee_number: row[employee_number].clone(),
            first_name: row[first_name].clone(),
            last_name: row[last_name].clone(),
            username: row[username].clone(),
            email: row[email].clone(),
            building: row[building].clone(),
            hire_date: row[hire_date].clone(),
            term_date: row[term_date].clone(),
            password: row[password].clone(),
        })
        .collect::<Vec<_>>();
    debug!(path = %path.display(), rows = rows.len(), "roster export loaded");
    Ok(rows)
}

pub fn read_baseline(path: &Path) -> Result<Vec<RawBaselineRow>> {
    let table = read_csv_table(path)?;
    let employee_number = table.require_column(COL_EMPLOYEE_NUMBER, path)?;
    let first_name = table.require_column(COL_FIRST_NAME, path)?;
    let last_name = table.require_column(COL_LAST_NAME, path)?;
    let username = table.require_column(COL_USERNAME, path)?;
    let email = table.require_column(COL_EMAIL, path)?;
    let building = table.require_column(COL_BUILDING, path)?;
    let password = table.require_column(COL_PASSWORD, path)?;

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| RawBaselineRow {
            row: idx + 1,
            employee_number: row[employee_number].clone(),
            first_name: row[first_name].clone(),
            last_name: row[last_name].clone(),
            username: row[username].clone(),
            email: row[email].clone(),
            building: row[building].clone(),
            password: row[password].clone(),
        })
        .collect::<Vec<_>>();
    debug!(path = %path.display(), rows = rows.len(), "baseline loaded");
    Ok(rows)
}
