//! Retriable retrieval of the roster export.
//!
//! The transport itself is an external collaborator behind
//! [`RemoteSource`]; this crate owns the retry budget, attempt logging,
//! and local filename normalization. Retries use a fixed delay between
//! attempts (no delay after the last one). Exhaustion is surfaced, not
//! fatal: the caller decides whether a pre-existing local file is good
//! enough to proceed with.

pub mod error;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

pub use error::{FetchError, Result};

/// Attempts per fetch before giving up.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Fixed delay between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Locale suffix some export systems append before the extension.
const LOCALE_SUFFIX: &str = "-en";

/// A remote location the export can be copied from.
pub trait RemoteSource {
    /// Fetches `name` from the remote location into `dest`.
    fn fetch(&self, name: &str, dest: &Path) -> io::Result<()>;
}

/// A mounted or local drop directory acting as the remote side.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RemoteSource for DirSource {
    fn fetch(&self, name: &str, dest: &Path) -> io::Result<()> {
        fs::copy(self.root.join(name), dest)?;
        Ok(())
    }
}

/// Retry budget and pacing for one fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Strips the locale suffix from an exported filename.
///
/// `roster_export-en.csv` becomes `roster_export.csv`; names without
/// the suffix are returned unchanged.
pub fn normalize_remote_filename(name: &str) -> String {
    let path = Path::new(name);
    let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
        return name.to_string();
    };
    let Some(trimmed) = stem.strip_suffix(LOCALE_SUFFIX) else {
        return name.to_string();
    };
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) => format!("{trimmed}.{extension}"),
        None => trimmed.to_string(),
    }
}

/// Fetches `name` into `dest_dir`, retrying up to `options.max_retries`
/// times with `options.retry_delay` between attempts.
///
/// On success the local copy is renamed to its normalized filename,
/// replacing any stale copy from a previous pass, and the final path is
/// returned.
pub fn fetch_with_retry(
    source: &dyn RemoteSource,
    name: &str,
    dest_dir: &Path,
    options: &FetchOptions,
) -> Result<PathBuf> {
    let raw_path = dest_dir.join(name);
    let final_path = dest_dir.join(normalize_remote_filename(name));
    let mut last_error: Option<io::Error> = None;

    for attempt in 1..=options.max_retries {
        info!(name, attempt, max_retries = options.max_retries, "fetching roster export");
        match source.fetch(name, &raw_path) {
            Ok(()) => {
                if raw_path != final_path {
                    if final_path.exists() {
                        fs::remove_file(&final_path)?;
                    }
                    fs::rename(&raw_path, &final_path)?;
                }
                info!(path = %final_path.display(), attempt, "roster export fetched");
                return Ok(final_path);
            }
            Err(error) => {
                warn!(name, attempt, %error, "fetch attempt failed");
                last_error = Some(error);
                if attempt < options.max_retries {
                    thread::sleep(options.retry_delay);
                }
            }
        }
    }

    Err(FetchError::RetriesExhausted {
        name: name.to_string(),
        attempts: options.max_retries,
        last: last_error.unwrap_or_else(|| io::Error::other("fetch was never attempted")),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    struct FlakySource {
        inner: DirSource,
        failures: u32,
        calls: AtomicU32,
    }

    impl RemoteSource for FlakySource {
        fn fetch(&self, name: &str, dest: &Path) -> io::Result<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(io::Error::other("transient failure"));
            }
            self.inner.fetch(name, dest)
        }
    }

    fn immediate() -> FetchOptions {
        FetchOptions {
            max_retries: 3,
            retry_delay: Duration::ZERO,
        }
    }

    #[test]
    fn locale_suffix_is_stripped() {
        assert_eq!(
            normalize_remote_filename("roster_export-en.csv"),
            "roster_export.csv"
        );
        assert_eq!(
            normalize_remote_filename("roster_export.csv"),
            "roster_export.csv"
        );
        assert_eq!(normalize_remote_filename("roster-en"), "roster");
    }

    #[test]
    fn fetch_renames_to_normalized_name_and_replaces_stale_copy() {
        let remote = tempfile::tempdir().expect("remote dir");
        let local = tempfile::tempdir().expect("local dir");
        fs::write(remote.path().join("roster_export-en.csv"), "fresh").expect("seed remote");
        fs::write(local.path().join("roster_export.csv"), "stale").expect("seed stale copy");

        let source = DirSource::new(remote.path());
        let path = fetch_with_retry(
            &source,
            "roster_export-en.csv",
            local.path(),
            &immediate(),
        )
        .expect("fetch");

        assert_eq!(path, local.path().join("roster_export.csv"));
        assert_eq!(fs::read_to_string(&path).expect("read"), "fresh");
        assert!(!local.path().join("roster_export-en.csv").exists());
    }

    #[test]
    fn transient_failures_are_retried() {
        let remote = tempfile::tempdir().expect("remote dir");
        let local = tempfile::tempdir().expect("local dir");
        fs::write(remote.path().join("roster_export.csv"), "data").expect("seed remote");

        let source = FlakySource {
            inner: DirSource::new(remote.path()),
            failures: 2,
            calls: AtomicU32::new(0),
        };
        let path = fetch_with_retry(&source, "roster_export.csv", local.path(), &immediate())
            .expect("third attempt succeeds");

        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert!(path.exists());
    }

    #[test]
    fn exhaustion_reports_attempts_and_last_error() {
        let remote = tempfile::tempdir().expect("remote dir");
        let local = tempfile::tempdir().expect("local dir");
        // Remote file never appears.
        let source = DirSource::new(remote.path());

        let error = fetch_with_retry(&source, "roster_export.csv", local.path(), &immediate())
            .expect_err("must exhaust");
        match error {
            FetchError::RetriesExhausted { attempts, name, .. } => {
                assert_eq!(attempts, 3);
                assert_eq!(name, "roster_export.csv");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
