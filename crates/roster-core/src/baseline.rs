//! Baseline projection and backup naming.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use roster_model::{BaselineRecord, EmployeeRecord};

/// Projects the normalized incoming dataset into the next baseline.
///
/// The window-sensitive date columns are dropped; row count matches the
/// incoming dataset exactly.
pub fn next_baseline(incoming: &[EmployeeRecord]) -> Vec<BaselineRecord> {
    incoming.iter().map(EmployeeRecord::to_baseline).collect()
}

/// Dated sibling path for the pre-replacement baseline copy.
///
/// `roster_base.csv` on 2024-03-01 becomes `roster_base_20240301.csv`.
pub fn backup_path(baseline_path: &Path, as_of: NaiveDate) -> PathBuf {
    let stem = baseline_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("baseline");
    let extension = baseline_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("csv");
    let name = format!("{stem}_{}.{extension}", as_of.format("%Y%m%d"));
    baseline_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_rows_match_incoming_rows() {
        let incoming = vec![
            EmployeeRecord {
                employee_number: "1001".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                username: "janedoe".to_string(),
                email: "janedoe@example.com".to_string(),
                building: "HQ".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2024, 2, 15),
                term_date: None,
                password: Some("01234567".to_string()),
            },
            EmployeeRecord {
                employee_number: "1002".to_string(),
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
                username: "jsmith".to_string(),
                email: "jsmith@example.com".to_string(),
                building: "Annex".to_string(),
                hire_date: None,
                term_date: NaiveDate::from_ymd_opt(2024, 2, 20),
                password: None,
            },
        ];
        let baseline = next_baseline(&incoming);
        assert_eq!(baseline.len(), incoming.len());
        assert_eq!(baseline[0].employee_number, "1001");
        assert_eq!(baseline[1].password, None);
    }

    #[test]
    fn backup_path_is_dated_sibling() {
        let as_of = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        assert_eq!(
            backup_path(Path::new("/data/roster_base.csv"), as_of),
            PathBuf::from("/data/roster_base_20240301.csv")
        );
    }
}
