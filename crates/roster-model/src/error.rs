use std::path::PathBuf;

use thiserror::Error;

use crate::schema::ROSTER_DATETIME_FORMAT;

/// Errors that abort a reconciliation pass.
///
/// Fetch failures live in `roster-fetch`; they are recoverable and never
/// reach this taxonomy. Everything here is fatal: emitting a
/// partially-correct change-set would silently drop provisioning actions.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing expected column {column:?} in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error(
        "employee {employee_number}: {field:?} value {value:?} does not match {ROSTER_DATETIME_FORMAT:?}"
    )]
    InvalidDate {
        employee_number: String,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: employee number is missing")]
    MissingEmployeeNumber { row: usize },

    #[error("duplicate employee number {employee_number:?}")]
    DuplicateEmployeeNumber { employee_number: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
