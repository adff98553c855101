//! Action classification rules.
//!
//! One pure function from (incoming record, optional baseline record,
//! window) to an action. Rules apply in precedence order; the first
//! match wins, so every record gets exactly one action.

use roster_model::schema::{COL_BUILDING, COL_EMAIL, COL_FIRST_NAME, COL_LAST_NAME, COL_USERNAME};
use roster_model::{Action, BaselineRecord, EmployeeRecord};

use crate::window::ReconWindow;

/// Classifies one incoming record.
///
/// 1. Term date inside the window wins over everything else.
/// 2. Hire date inside the window marks a new hire.
/// 3. With a baseline match, any identity-field mismatch marks an update.
///    A record hired inside the window never reaches this rule, so a
///    fresh hire is not also flagged as an update in the same pass.
/// 4. Otherwise no action.
///
/// First-appearance records (no baseline match) can still be classified
/// `A` or `T`; update detection simply requires a baseline counterpart.
pub fn classify(
    incoming: &EmployeeRecord,
    baseline: Option<&BaselineRecord>,
    window: ReconWindow,
) -> Action {
    if incoming.term_date.is_some_and(|date| window.contains(date)) {
        return Action::Terminate;
    }
    if incoming.hire_date.is_some_and(|date| window.contains(date)) {
        return Action::Add;
    }
    if let Some(baseline) = baseline
        && !compare_fields(incoming, baseline).is_empty()
    {
        return Action::Update;
    }
    Action::None
}

/// Field-by-field comparison of the identity columns.
///
/// Returns `(column, baseline value, incoming value)` for every mismatch.
/// Equality is exact string comparison post-normalization.
pub fn compare_fields(
    incoming: &EmployeeRecord,
    baseline: &BaselineRecord,
) -> Vec<(&'static str, String, String)> {
    let pairs = [
        (COL_FIRST_NAME, &baseline.first_name, &incoming.first_name),
        (COL_LAST_NAME, &baseline.last_name, &incoming.last_name),
        (COL_USERNAME, &baseline.username, &incoming.username),
        (COL_EMAIL, &baseline.email, &incoming.email),
        (COL_BUILDING, &baseline.building, &incoming.building),
    ];
    pairs
        .into_iter()
        .filter(|(_, old, new)| old != new)
        .map(|(column, old, new)| (column, old.clone(), new.clone()))
        .collect()
}
