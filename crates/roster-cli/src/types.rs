//! Result types for one reconciliation pass.

use std::path::PathBuf;

use chrono::NaiveDate;

use roster_core::{ActionCounts, ReconWindow};
use roster_model::CredentialAnomaly;

/// Outcome of the optional fetch stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// No fetch configured or `--no-fetch` given.
    Skipped,
    /// Export retrieved to the given local path.
    Fetched(PathBuf),
    /// Retry budget exhausted; the pass continued against a
    /// pre-existing local export.
    FailedUsingLocal,
}

/// Summary of one completed pass.
#[derive(Debug, Clone)]
pub struct PassResult {
    pub as_of: NaiveDate,
    pub window: ReconWindow,
    pub counts: ActionCounts,
    pub change_rows: usize,
    pub field_changes: usize,
    pub anomalies: Vec<CredentialAnomaly>,
    pub fetch: FetchOutcome,
    pub baseline_path: PathBuf,
    /// Absent on dry runs.
    pub change_set_path: Option<PathBuf>,
    /// Absent on dry runs.
    pub backup_path: Option<PathBuf>,
    pub dry_run: bool,
}
