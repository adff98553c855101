//! Record normalization: canonical logins, credential padding, missing-value
//! sentinels, and date parsing.
//!
//! Normalization is idempotent: running it over an already-normalized
//! record changes nothing. Downstream comparison relies on this, since the
//! baseline is stored post-normalization and normalized again on load.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use roster_ingest::{RawBaselineRow, RawEmployeeRow};
use roster_model::schema::{CREDENTIAL_LENGTH, NOT_PROVIDED, ROSTER_DATETIME_FORMAT};
use roster_model::{BaselineRecord, CredentialAnomaly, EmployeeRecord, Result, RosterError};

/// Removes every `.` from the local part of a login or email address.
///
/// Only the text before the first `@` is affected; values without an `@`
/// are returned unchanged.
pub fn strip_local_dots(value: &str) -> String {
    match value.find('@') {
        Some(at) => {
            let (local, domain) = value.split_at(at);
            let mut cleaned = local.replace('.', "");
            cleaned.push_str(domain);
            cleaned
        }
        None => value.to_string(),
    }
}

/// Canonical integer digit string for numeric-like credential exports.
///
/// Spreadsheet-originated exports render credentials as `1234567` or
/// `1234567.0`; both collapse to the same digit string.
fn canonical_digits(value: &str) -> Option<String> {
    if let Ok(number) = value.parse::<i64>() {
        return Some(number.to_string());
    }
    if let Ok(number) = value.parse::<f64>()
        && number.is_finite()
        && number.fract() == 0.0
    {
        return Some((number as i64).to_string());
    }
    None
}

/// Normalizes a credential value.
///
/// Numeric-like values are reduced to their digit string and left-padded
/// with a single `0` when exactly 7 digits long; other strings are kept
/// verbatim; empty input stays absent.
pub fn normalize_credential(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = match canonical_digits(trimmed) {
        Some(digits) if digits.len() == CREDENTIAL_LENGTH - 1 => format!("0{digits}"),
        Some(digits) => digits,
        None => trimmed.to_string(),
    };
    Some(value)
}

/// Replaces an empty identity value with the comparable sentinel.
fn or_not_provided(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        trimmed.to_string()
    }
}

fn normalize_login(value: &str) -> String {
    or_not_provided(&strip_local_dots(value.trim()))
}

/// Parses a roster timestamp down to calendar-date granularity.
///
/// An empty value is absent; any other shape that does not match the
/// export's fixed format aborts the pass rather than corrupting
/// classification.
pub fn parse_roster_date(
    employee_number: &str,
    field: &'static str,
    raw: &str,
) -> Result<Option<NaiveDate>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(trimmed, ROSTER_DATETIME_FORMAT)
        .map(|stamp| Some(stamp.date()))
        .map_err(|_| RosterError::InvalidDate {
            employee_number: employee_number.to_string(),
            field,
            value: trimmed.to_string(),
        })
}

/// Normalizes one raw incoming row into an [`EmployeeRecord`].
pub fn normalize_employee(raw: &RawEmployeeRow) -> Result<EmployeeRecord> {
    let employee_number = raw.employee_number.trim().to_string();
    if employee_number.is_empty() {
        return Err(RosterError::MissingEmployeeNumber { row: raw.row });
    }
    Ok(EmployeeRecord {
        first_name: or_not_provided(&raw.first_name),
        last_name: or_not_provided(&raw.last_name),
        username: normalize_login(&raw.username),
        email: normalize_login(&raw.email),
        building: or_not_provided(&raw.building),
        hire_date: parse_roster_date(&employee_number, "Hire Date", &raw.hire_date)?,
        term_date: parse_roster_date(&employee_number, "Term Date", &raw.term_date)?,
        password: normalize_credential(&raw.password),
        employee_number,
    })
}

/// Normalizes one raw baseline row into a [`BaselineRecord`].
pub fn normalize_baseline(raw: &RawBaselineRow) -> Result<BaselineRecord> {
    let employee_number = raw.employee_number.trim().to_string();
    if employee_number.is_empty() {
        return Err(RosterError::MissingEmployeeNumber { row: raw.row });
    }
    Ok(BaselineRecord {
        first_name: or_not_provided(&raw.first_name),
        last_name: or_not_provided(&raw.last_name),
        username: normalize_login(&raw.username),
        email: normalize_login(&raw.email),
        building: or_not_provided(&raw.building),
        password: normalize_credential(&raw.password),
        employee_number,
    })
}

/// Collects credentials that survived normalization with the wrong length.
pub fn credential_anomalies(records: &[EmployeeRecord]) -> Vec<CredentialAnomaly> {
    let anomalies: Vec<CredentialAnomaly> = records
        .iter()
        .filter_map(|record| {
            let password = record.password.as_ref()?;
            if password.chars().count() == CREDENTIAL_LENGTH {
                return None;
            }
            Some(CredentialAnomaly {
                employee_number: record.employee_number.clone(),
                length: password.chars().count(),
            })
        })
        .collect();
    if !anomalies.is_empty() {
        debug!(count = anomalies.len(), "credential anomalies detected");
    }
    anomalies
}
