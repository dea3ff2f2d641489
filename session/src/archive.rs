//! Solve-report archival.
//!
//! Writes the JSON report where a surrounding application keeps run
//! artifacts: one file per solve, fixed name, caller-chosen directory.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use taquin_search::report;
use taquin_search::search::SolveOutcome;

/// File name of the archived report.
pub const REPORT_FILE: &str = "solve_report.json";

/// Failure writing a report.
#[derive(Debug)]
pub enum ArchiveError {
    /// Report serialization failed.
    Serialize(serde_json::Error),
    /// Filesystem write failed.
    Io(io::Error),
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "report serialization failed: {err}"),
            Self::Io(err) => write!(f, "report write failed: {err}"),
        }
    }
}

impl std::error::Error for ArchiveError {}

/// Write the report for `outcome` into `dir`, returning the file path.
///
/// # Errors
///
/// [`ArchiveError::Serialize`] if the report cannot be serialized,
/// [`ArchiveError::Io`] if the file cannot be written.
pub fn write_report(dir: &Path, outcome: &SolveOutcome) -> Result<PathBuf, ArchiveError> {
    let bytes = report::to_json_bytes(outcome).map_err(ArchiveError::Serialize)?;
    let path = dir.join(REPORT_FILE);
    fs::write(&path, bytes).map_err(ArchiveError::Io)?;
    Ok(path)
}
