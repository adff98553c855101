//! Change-set derivation: join, classify, filter, project, redact.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use roster_model::{
    Action, BaselineRecord, ChangeRecord, EmployeeRecord, FieldChange, Result, RosterError,
};

use crate::classify::{classify, compare_fields};
use crate::window::ReconWindow;

/// Per-action tallies for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionCounts {
    pub adds: usize,
    pub terminations: usize,
    pub updates: usize,
    pub unchanged: usize,
}

/// The derived output of one reconciliation pass.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    /// Actionable records, in incoming-dataset order.
    pub records: Vec<ChangeRecord>,
    /// Every field-level difference against the baseline, for the audit
    /// trail; includes records whose final action is `T`.
    pub changes: Vec<FieldChange>,
    pub counts: ActionCounts,
}

/// Keys baseline records by employee number; duplicates abort the pass.
pub fn index_baseline(
    records: Vec<BaselineRecord>,
) -> Result<BTreeMap<String, BaselineRecord>> {
    let mut index = BTreeMap::new();
    for record in records {
        let key = record.employee_number.clone();
        if index.insert(key.clone(), record).is_some() {
            return Err(RosterError::DuplicateEmployeeNumber {
                employee_number: key,
            });
        }
    }
    Ok(index)
}

/// Enforces the one-record-per-employee invariant on the incoming side.
pub fn ensure_unique(records: &[EmployeeRecord]) -> Result<()> {
    let mut seen = BTreeMap::new();
    for record in records {
        if seen
            .insert(record.employee_number.as_str(), ())
            .is_some()
        {
            return Err(RosterError::DuplicateEmployeeNumber {
                employee_number: record.employee_number.clone(),
            });
        }
    }
    Ok(())
}

/// Classifies every incoming record against the baseline and derives the
/// change-set.
///
/// Records are walked in input order, so the same inputs and window
/// always produce an identical change-set. A record absent from the
/// baseline is excluded from update detection but still eligible for
/// hire/termination classification; a baseline record absent from the
/// incoming dataset contributes nothing.
pub fn build_change_set(
    incoming: &[EmployeeRecord],
    baseline: &BTreeMap<String, BaselineRecord>,
    window: ReconWindow,
) -> ChangeSet {
    let mut change_set = ChangeSet::default();
    for record in incoming {
        let counterpart = baseline.get(&record.employee_number);
        let action = classify(record, counterpart, window);

        if let Some(counterpart) = counterpart
            && !record.hire_date.is_some_and(|date| window.contains(date))
        {
            for (field, old, new) in compare_fields(record, counterpart) {
                change_set.changes.push(FieldChange {
                    employee_number: record.employee_number.clone(),
                    field,
                    baseline: old,
                    incoming: new,
                    hire_date: record.hire_date,
                    term_date: record.term_date,
                    action,
                });
            }
        }

        match action {
            Action::None => change_set.counts.unchanged += 1,
            Action::Add => change_set.counts.adds += 1,
            Action::Terminate => change_set.counts.terminations += 1,
            Action::Update => change_set.counts.updates += 1,
        }
        if action.is_actionable() {
            change_set.records.push(to_change_record(record, action));
        }
    }
    info!(
        adds = change_set.counts.adds,
        terminations = change_set.counts.terminations,
        updates = change_set.counts.updates,
        unchanged = change_set.counts.unchanged,
        "classification complete"
    );
    change_set
}

/// Projects the incoming-side values into an output row. The credential
/// is cleared on updates so downstream provisioning re-issues it.
fn to_change_record(record: &EmployeeRecord, action: Action) -> ChangeRecord {
    let password = if action == Action::Update {
        None
    } else {
        record.password.clone()
    };
    ChangeRecord {
        employee_number: record.employee_number.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        username: record.username.clone(),
        email: record.email.clone(),
        building: record.building.clone(),
        password,
        action,
    }
}

/// Name of the change-set artifact for a pass date.
pub fn change_set_filename(prefix: &str, as_of: NaiveDate) -> String {
    format!("{prefix}_{}.csv", as_of.format("%Y%m%d"))
}
