pub mod error;
pub mod record;
pub mod schema;

pub use error::{Result, RosterError};
pub use record::{
    Action, BaselineRecord, ChangeRecord, CredentialAnomaly, EmployeeRecord, FieldChange,
};
pub use schema::{
    BASELINE_COLUMNS, CHANGE_SET_COLUMNS, COL_ACTION, COL_BUILDING, COL_EMAIL,
    COL_EMPLOYEE_NUMBER, COL_FIRST_NAME, COL_HIRE_DATE, COL_LAST_NAME, COL_PASSWORD,
    COL_TERM_DATE, COL_USERNAME, COMPARE_COLUMNS, CREDENTIAL_LENGTH, NOT_PROVIDED,
    ROSTER_COLUMNS, ROSTER_DATETIME_FORMAT,
};
