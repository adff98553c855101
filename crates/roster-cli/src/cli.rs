//! CLI argument definitions for the roster reconciliation tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster-recon",
    version,
    about = "Roster reconciliation - derive provisioning change-sets from HR exports",
    long_about = "Reconcile a periodic HR roster export against the stored baseline.\n\n\
                  Detects new hires, terminations, and attribute changes for the\n\
                  previous calendar month, writes a dated change-set for the\n\
                  provisioning process, and replaces the baseline with a dated\n\
                  backup of the prior one."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow employee field values in log output (PII; redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one reconciliation pass over a data folder.
    Run(RunArgs),

    /// List the expected roster columns and where each one flows.
    Columns,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Folder holding the baseline and the incoming export.
    #[arg(value_name = "DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Pass configuration file (default: <DATA_DIR>/roster-recon.json).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory for the change-set (default: DATA_DIR).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Pass date used to derive the reconciliation window (default: today).
    ///
    /// The window always covers the calendar month before this date, so
    /// any date within one month yields the same window.
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Classify and report without writing any artifact.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the remote fetch stage even when configured.
    #[arg(long = "no-fetch")]
    pub no_fetch: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
