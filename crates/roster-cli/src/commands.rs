//! Subcommand implementations: the reconciliation pass and schema listing.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span, warn};

use roster_core::{
    ReconWindow, backup_path, build_change_set, change_set_filename, credential_anomalies,
    ensure_unique, index_baseline, next_baseline, normalize_baseline, normalize_employee,
};
use roster_fetch::{DirSource, FetchOptions, fetch_with_retry};
use roster_ingest::{read_baseline, read_roster, write_baseline, write_change_set};
use roster_model::schema::{
    BASELINE_COLUMNS, CHANGE_SET_COLUMNS, COL_BUILDING, COL_EMAIL, COL_EMPLOYEE_NUMBER,
    COL_FIRST_NAME, COL_HIRE_DATE, COL_LAST_NAME, COL_PASSWORD, COL_TERM_DATE, COL_USERNAME,
    COMPARE_COLUMNS, ROSTER_COLUMNS,
};
use roster_model::Action;

use crate::cli::RunArgs;
use crate::config::{AppConfig, FetchSettings};
use crate::logging::redact_value;
use crate::summary::apply_table_style;
use crate::types::{FetchOutcome, PassResult};

/// Lists the fixed roster schema and where each column flows.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Compared", "Baseline", "Change-Set", "Notes"]);
    apply_table_style(&mut table);
    for column in ROSTER_COLUMNS {
        let compared = COMPARE_COLUMNS.contains(&column);
        let in_baseline = BASELINE_COLUMNS.contains(&column);
        let in_change_set = CHANGE_SET_COLUMNS.contains(&column);
        table.add_row(vec![
            column,
            if compared { "yes" } else { "-" },
            if in_baseline { "yes" } else { "-" },
            if in_change_set { "yes" } else { "-" },
            column_notes(column),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn column_notes(column: &str) -> &'static str {
    match column {
        COL_EMPLOYEE_NUMBER => "stable identifier, never reused",
        COL_FIRST_NAME | COL_LAST_NAME | COL_BUILDING => "compared for updates; blank becomes Not Provided",
        COL_USERNAME | COL_EMAIL => "dots stripped from the local part; compared for updates",
        COL_HIRE_DATE | COL_TERM_DATE => "window-sensitive; recomputed each pass, never persisted",
        COL_PASSWORD => "zero-padded to 8 digits when numeric; cleared on updates",
        _ => "",
    }
}

/// Runs one end-to-end reconciliation pass.
pub fn run_pass(args: &RunArgs) -> Result<PassResult> {
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let window = ReconWindow::previous_month(as_of);
    let pass_span = info_span!("pass", as_of = %as_of, window = %window);
    let _pass_guard = pass_span.enter();

    let config = AppConfig::resolve(args.config.as_deref(), &args.data_dir)?;
    let baseline_path = args.data_dir.join(&config.baseline_file);
    let mut incoming_path = args.data_dir.join(&config.incoming_file);

    // =========================================================================
    // Stage 1: Fetch - retrieve the export, or fall back to a local copy
    // =========================================================================
    let fetch = if args.no_fetch {
        FetchOutcome::Skipped
    } else if let Some(settings) = &config.fetch {
        match fetch_export(settings, &args.data_dir) {
            Ok(path) => {
                incoming_path = path.clone();
                FetchOutcome::Fetched(path)
            }
            Err(error) if incoming_path.exists() => {
                warn!(
                    error = %format!("{error:#}"),
                    path = %incoming_path.display(),
                    "fetch failed; processing existing local export"
                );
                FetchOutcome::FailedUsingLocal
            }
            Err(error) => return Err(error),
        }
    } else {
        FetchOutcome::Skipped
    };

    // =========================================================================
    // Stage 2: Load and normalize both datasets
    // =========================================================================
    let baseline_rows = read_baseline(&baseline_path)
        .with_context(|| format!("load baseline {}", baseline_path.display()))?;
    let roster_rows = read_roster(&incoming_path)
        .with_context(|| format!("load roster export {}", incoming_path.display()))?;

    let incoming = roster_rows
        .iter()
        .map(normalize_employee)
        .collect::<roster_model::Result<Vec<_>>>()
        .context("normalize incoming roster")?;
    ensure_unique(&incoming).context("incoming roster integrity")?;

    let baseline_records = baseline_rows
        .iter()
        .map(normalize_baseline)
        .collect::<roster_model::Result<Vec<_>>>()
        .context("normalize baseline")?;
    let baseline = index_baseline(baseline_records).context("baseline integrity")?;

    let anomalies = credential_anomalies(&incoming);
    for anomaly in &anomalies {
        warn!(
            employee_number = %anomaly.employee_number,
            length = anomaly.length,
            expected = anomaly.expected_length(),
            "credential is not the expected length"
        );
    }

    // =========================================================================
    // Stage 3: Classify and derive the change-set
    // =========================================================================
    let change_set = build_change_set(&incoming, &baseline, window);
    audit_change_set(&change_set);

    // =========================================================================
    // Stage 4: Write the change-set, back up and replace the baseline
    // =========================================================================
    let (change_set_path, backup) = if args.dry_run {
        info!("dry run: no artifacts written");
        (None, None)
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| args.data_dir.clone());
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir {}", output_dir.display()))?;
        let change_path = output_dir.join(change_set_filename(&config.export_prefix, as_of));
        write_change_set(&change_path, &change_set.records)
            .with_context(|| format!("write change-set {}", change_path.display()))?;

        let backup = backup_path(&baseline_path, as_of);
        fs::copy(&baseline_path, &backup)
            .with_context(|| format!("back up baseline to {}", backup.display()))?;
        write_baseline(&baseline_path, &next_baseline(&incoming))
            .with_context(|| format!("replace baseline {}", baseline_path.display()))?;
        (Some(change_path), Some(backup))
    };

    Ok(PassResult {
        as_of,
        window,
        counts: change_set.counts,
        change_rows: change_set.records.len(),
        field_changes: change_set.changes.len(),
        anomalies,
        fetch,
        baseline_path,
        change_set_path,
        backup_path: backup,
        dry_run: args.dry_run,
    })
}

fn fetch_export(settings: &FetchSettings, dest_dir: &std::path::Path) -> Result<PathBuf> {
    let source = DirSource::new(&settings.source_dir);
    let options = FetchOptions {
        max_retries: settings.max_retries,
        retry_delay: Duration::from_secs(settings.retry_delay_secs),
    };
    fetch_with_retry(&source, &settings.file_name, dest_dir, &options)
        .context("fetch roster export")
}

/// Emits the audit trail: every detected field change plus a listing of
/// each hire and termination. Values go through the PII redaction gate.
fn audit_change_set(change_set: &roster_core::ChangeSet) {
    for change in &change_set.changes {
        info!(
            employee_number = %change.employee_number,
            field = change.field,
            old = %redact_value(&change.baseline),
            new = %redact_value(&change.incoming),
            hire_date = ?change.hire_date,
            term_date = ?change.term_date,
            action = %change.action,
            "field change detected"
        );
    }
    for record in &change_set.records {
        match record.action {
            Action::Add => {
                info!(
                    employee_number = %record.employee_number,
                    first_name = %redact_value(&record.first_name),
                    last_name = %redact_value(&record.last_name),
                    "new hire"
                );
            }
            Action::Terminate => {
                info!(
                    employee_number = %record.employee_number,
                    first_name = %redact_value(&record.first_name),
                    last_name = %redact_value(&record.last_name),
                    "termination"
                );
            }
            _ => {}
        }
    }
}
