use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Declining to uninstall, and individual uninstall failures, still
/// finish with `Success`; only setup problems are reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Normal completion
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Setup or application error (tool missing, command failure, bad config, etc.)
    ApplicationError = 3,
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for scanning and cleaning an environment.
#[derive(Debug, Error)]
pub enum CleanerError {
    #[error("Dependency tree tool '{tool}' is not available\nDetails: {details}\n\n💡 Hint: Install it manually with `{install_hint}` or allow automatic installation")]
    DependencyToolUnavailable {
        tool: String,
        details: String,
        install_hint: String,
    },

    #[error("Command failed: {command}\nDetails: {details}\n\n💡 Hint: Verify that the Python interpreter and pip work in this environment")]
    CommandFailed { command: String, details: String },

    #[error("Failed to parse output of {source_name}\nDetails: {details}")]
    OutputParseError { source_name: String, details: String },

    #[error("Invalid Python interpreter: {path}\nReason: {reason}\n\n💡 Hint: Pass an existing interpreter with --python or set `python` in the config file")]
    InvalidInterpreter { path: PathBuf, reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
