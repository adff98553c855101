use std::path::Path;

use csv::ReaderBuilder;

use roster_model::{Result, RosterError};

/// A delimited file read into memory: trimmed headers plus string rows.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Resolves a column by exact name; absence is fatal for the pass.
    pub fn require_column(&self, name: &str, path: &Path) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| RosterError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn csv_error(path: &Path, error: &csv::Error) -> RosterError {
    RosterError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Reads a delimited file with a header row. Cells are trimmed, fully
/// blank rows are dropped, and short rows are padded to the header width.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| csv_error(path, &error))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, &error))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}
