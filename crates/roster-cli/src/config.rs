//! Pass configuration loaded from a JSON file next to the data.
//!
//! Every field has a default so a bare data folder works without any
//! configuration; the fetch stage only runs when a `fetch` section is
//! present.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default configuration filename looked up inside the data folder.
pub const CONFIG_FILE_NAME: &str = "roster-recon.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Filename prefix of the change-set artifact (`<prefix>_<YYYYMMDD>.csv`).
    pub export_prefix: String,
    /// Baseline filename inside the data folder.
    pub baseline_file: String,
    /// Incoming export filename inside the data folder.
    pub incoming_file: String,
    /// Remote fetch settings; fetch is skipped when absent.
    pub fetch: Option<FetchSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_prefix: "roster".to_string(),
            baseline_file: "roster_base.csv".to_string(),
            incoming_file: "roster_export.csv".to_string(),
            fetch: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchSettings {
    /// Drop directory the export is retrieved from.
    pub source_dir: PathBuf,
    /// Remote filename; a locale suffix (`-en`) is stripped locally.
    pub file_name: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
}

fn default_max_retries() -> u32 {
    roster_fetch::DEFAULT_MAX_RETRIES
}

fn default_retry_delay_secs() -> u64 {
    roster_fetch::DEFAULT_RETRY_DELAY.as_secs()
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parse config {}", path.display()))
    }

    /// Resolves the effective configuration: an explicit `--config` path,
    /// else `<data_dir>/roster-recon.json` when present, else defaults.
    pub fn resolve(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = data_dir.join(CONFIG_FILE_NAME);
        if default_path.exists() {
            return Self::load(&default_path);
        }
        Ok(Self::default())
    }
}
