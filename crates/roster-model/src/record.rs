//! Employee record types flowing through a reconciliation pass.

use std::fmt;

use chrono::NaiveDate;

use crate::schema::CREDENTIAL_LENGTH;

/// Classification outcome for one employee record.
///
/// Assigned exactly once per pass. Termination takes precedence over the
/// hire rule when both window conditions match the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// No provisioning action required.
    #[default]
    None,
    /// New hire (`A`): hire date falls inside the reconciliation window.
    Add,
    /// Termination (`T`): term date falls inside the reconciliation window.
    Terminate,
    /// Attribute change (`U`): an identity field differs from the baseline.
    Update,
}

impl Action {
    /// Wire code written to the change-set artifact.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Add => "A",
            Self::Terminate => "T",
            Self::Update => "U",
        }
    }

    /// True for the actions included in the change-set output.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A normalized incoming roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub building: String,
    pub hire_date: Option<NaiveDate>,
    pub term_date: Option<NaiveDate>,
    pub password: Option<String>,
}

impl EmployeeRecord {
    /// Projects the record onto the baseline schema, dropping the
    /// window-sensitive date columns.
    pub fn to_baseline(&self) -> BaselineRecord {
        BaselineRecord {
            employee_number: self.employee_number.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            building: self.building.clone(),
            password: self.password.clone(),
        }
    }
}

/// A normalized baseline row from the previous pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineRecord {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub building: String,
    pub password: Option<String>,
}

/// One actionable row of the change-set output.
///
/// Field values come from the incoming side; `password` is cleared for
/// [`Action::Update`] so the credential is re-issued downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub building: String,
    pub password: Option<String>,
    pub action: Action,
}

/// One detected field-level difference, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub employee_number: String,
    pub field: &'static str,
    pub baseline: String,
    pub incoming: String,
    pub hire_date: Option<NaiveDate>,
    pub term_date: Option<NaiveDate>,
    pub action: Action,
}

/// A credential that survived normalization with an unexpected length.
///
/// Reported as a warning; the pass continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialAnomaly {
    pub employee_number: String,
    pub length: usize,
}

impl CredentialAnomaly {
    pub fn expected_length(&self) -> usize {
        CREDENTIAL_LENGTH
    }
}
