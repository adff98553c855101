pub mod csv_table;
pub mod output;
pub mod roster;

pub use csv_table::{CsvTable, read_csv_table};
pub use output::{write_baseline, write_change_set};
pub use roster::{RawBaselineRow, RawEmployeeRow, read_baseline, read_roster};
