use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Skipped match records never change the exit code; only errors that
/// abort the whole run do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report produced (individual records may have been skipped)
    Success = 0,
    /// Fatal error: malformed input, bad configuration, or output failure
    Failure = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
        }
    }
}

/// Errors that abort a report run.
///
/// Record-level problems are not represented here; those are
/// `MatchError`s collected by the extractor and reported as warnings.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Input is not a valid report request: {details}\n\n💡 Hint: Pipe a JSON document with 'repository_info' and 'pattern_matches' on stdin")]
    InvalidInput { details: String },

    #[error("Input is missing required key '{key}'\n\n💡 Hint: The top-level object must contain both 'repository_info' and 'pattern_matches'")]
    MissingInputKey { key: &'static str },

    #[error("Invalid configuration file: {path}\nReason: {reason}")]
    ConfigError { path: PathBuf, reason: String },

    #[error("Failed to produce report output: {details}")]
    OutputError { details: String },
}
