//! Fixed roster schema: column names and shared constants.
//!
//! Column matching is by exact name, not position. The incoming export
//! carries all nine columns; the stored baseline never carries the two
//! date columns, and the change-set output appends `Action`.

pub const COL_EMPLOYEE_NUMBER: &str = "Employee Number";
pub const COL_FIRST_NAME: &str = "First Name";
pub const COL_LAST_NAME: &str = "Last Name";
pub const COL_USERNAME: &str = "Username";
pub const COL_EMAIL: &str = "Email";
pub const COL_BUILDING: &str = "Building";
pub const COL_HIRE_DATE: &str = "Hire Date";
pub const COL_TERM_DATE: &str = "Term Date";
pub const COL_PASSWORD: &str = "Password";
pub const COL_ACTION: &str = "Action";

/// Sentinel stored in place of a missing identity value so downstream
/// comparisons see a concrete, comparable string.
pub const NOT_PROVIDED: &str = "Not Provided";

/// Expected length of a normalized credential.
pub const CREDENTIAL_LENGTH: usize = 8;

/// Timestamp format of the `Hire Date` / `Term Date` columns in the export.
pub const ROSTER_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Columns of the incoming roster export.
pub const ROSTER_COLUMNS: [&str; 9] = [
    COL_EMPLOYEE_NUMBER,
    COL_FIRST_NAME,
    COL_LAST_NAME,
    COL_USERNAME,
    COL_EMAIL,
    COL_BUILDING,
    COL_HIRE_DATE,
    COL_TERM_DATE,
    COL_PASSWORD,
];

/// Columns of the stored baseline (window-sensitive dates are never persisted).
pub const BASELINE_COLUMNS: [&str; 7] = [
    COL_EMPLOYEE_NUMBER,
    COL_FIRST_NAME,
    COL_LAST_NAME,
    COL_USERNAME,
    COL_EMAIL,
    COL_BUILDING,
    COL_PASSWORD,
];

/// Columns of the change-set artifact consumed by provisioning.
pub const CHANGE_SET_COLUMNS: [&str; 8] = [
    COL_EMPLOYEE_NUMBER,
    COL_FIRST_NAME,
    COL_LAST_NAME,
    COL_USERNAME,
    COL_EMAIL,
    COL_BUILDING,
    COL_PASSWORD,
    COL_ACTION,
];

/// Identity columns compared field-by-field during update detection.
pub const COMPARE_COLUMNS: [&str; 5] = [
    COL_FIRST_NAME,
    COL_LAST_NAME,
    COL_USERNAME,
    COL_EMAIL,
    COL_BUILDING,
];
