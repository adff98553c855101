pub mod baseline;
pub mod changeset;
pub mod classify;
pub mod normalize;
pub mod window;

pub use baseline::{backup_path, next_baseline};
pub use changeset::{
    ActionCounts, ChangeSet, build_change_set, change_set_filename, ensure_unique, index_baseline,
};
pub use classify::{classify, compare_fields};
pub use normalize::{
    credential_anomalies, normalize_baseline, normalize_credential, normalize_employee,
    parse_roster_date, strip_local_dots,
};
pub use window::ReconWindow;
