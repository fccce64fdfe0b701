use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::time_utils::DEFAULT_MAX_AGE_DAYS;

/// Fixed name of the workbook written to the working directory.
pub const OUTPUT_FILE: &str = "Filtered_Inventory.xlsx";

/// Message printed when the argument count is wrong.
pub const USAGE: &str = "Usage: process_file <path_to_text_file>";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Extract inventory older than six months from a text report into a spreadsheet
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "process_file",
    about = "Extract inventory older than six months from a text report into a spreadsheet",
    version
)]
pub struct Settings {
    /// Path to the fixed-width inventory report
    #[arg(value_name = "path_to_text_file", allow_hyphen_values = true)]
    pub input: PathBuf,
}

impl Settings {
    /// Parse the process arguments.
    ///
    /// Returns `Err(text)` with the message to print on stdout when the
    /// program should stop without processing: the usage line for a missing
    /// or extra argument, or clap's own text for `--help` / `--version`.
    pub fn from_args<I, T>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.to_string(),
            _ => USAGE.to_string(),
        })
    }
}

// ── ReportConfig ───────────────────────────────────────────────────────────────

/// Fixed parameters of a conversion run.
///
/// Not exposed on the command line; the defaults are the production values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Where the workbook is saved.
    pub output_path: PathBuf,
    /// Records dated on or after `today - max_age_days` are dropped.
    pub max_age_days: u64,
    /// Name of the per-record sheet.
    pub detail_sheet: String,
    /// Name of the totals sheet.
    pub summary_sheet: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILE),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            detail_sheet: "Filtered Inventory".to_string(),
            summary_sheet: "Summary".to_string(),
        }
    }
}

impl ReportConfig {
    /// Default config writing to `output_path` instead of the working directory.
    pub fn with_output(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
