//! Writers for the change-set and replacement-baseline artifacts.

use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use roster_model::schema::{BASELINE_COLUMNS, CHANGE_SET_COLUMNS};
use roster_model::{BaselineRecord, ChangeRecord, Result, RosterError};

fn csv_error(path: &Path, error: &csv::Error) -> RosterError {
    RosterError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Writes the change-set artifact. The credential is serialized as a
/// plain string so leading zeros survive; absent credentials are empty.
pub fn write_change_set(path: &Path, records: &[ChangeRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;
    writer
        .write_record(CHANGE_SET_COLUMNS)
        .map_err(|error| csv_error(path, &error))?;
    for record in records {
        writer
            .write_record([
                record.employee_number.as_str(),
                record.first_name.as_str(),
                record.last_name.as_str(),
                record.username.as_str(),
                record.email.as_str(),
                record.building.as_str(),
                record.password.as_deref().unwrap_or(""),
                record.action.as_code(),
            ])
            .map_err(|error| csv_error(path, &error))?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = records.len(), "change-set written");
    Ok(())
}

/// Writes the replacement baseline (no date columns).
pub fn write_baseline(path: &Path, records: &[BaselineRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;
    writer
        .write_record(BASELINE_COLUMNS)
        .map_err(|error| csv_error(path, &error))?;
    for record in records {
        writer
            .write_record([
                record.employee_number.as_str(),
                record.first_name.as_str(),
                record.last_name.as_str(),
                record.username.as_str(),
                record.email.as_str(),
                record.building.as_str(),
                record.password.as_deref().unwrap_or(""),
            ])
            .map_err(|error| csv_error(path, &error))?;
    }
    writer.flush()?;
    info!(path = %path.display(), rows = records.len(), "baseline written");
    Ok(())
}
