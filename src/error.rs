//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Launch failures (missing interpreter, failed install, failed application)
//!   are terminal for the run and are reported with a hint and a pause
//! - Configuration problems are reported as plain errors
//! - Use `anyhow::Error` (via `LauncherError::Other`) for unexpected errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The interpreter could not be run or rejected the version query.
    #[error("Python is not installed or not in PATH (tried '{interpreter}')")]
    InterpreterMissing { interpreter: String, minimum: String },

    /// Installing packages from the manifest failed.
    #[error("Failed to install required packages ({end})")]
    InstallFailed { command: String, end: ProcessEnd },

    /// The launched application exited with a non-zero status.
    #[error("Application exited with error code {code}")]
    ApplicationFailed { code: i32 },

    /// The launched application was killed before it could exit.
    #[error("Application was terminated by a signal")]
    ApplicationTerminated,

    /// A command could not be spawned or exited unexpectedly.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// How a failed child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessEnd {
    /// The process could not be spawned.
    NotStarted,
    /// The process exited with a non-zero code.
    Exited(i32),
    /// The process was killed before it could exit.
    Signaled,
}

impl fmt::Display for ProcessEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "could not be started"),
            Self::Exited(code) => write!(f, "exit code {}", code),
            Self::Signaled => write!(f, "terminated by a signal"),
        }
    }
}

impl LauncherError {
    /// Whether this error is one of the terminal launch failures that the
    /// user is shown with remediation text and a pause.
    pub fn is_launch_failure(&self) -> bool {
        matches!(
            self,
            Self::InterpreterMissing { .. }
                | Self::InstallFailed { .. }
                | Self::ApplicationFailed { .. }
                | Self::ApplicationTerminated
                | Self::CommandFailed { .. }
        )
    }

    /// Process exit status the launcher should finish with for this error.
    ///
    /// Application failures mirror the application's own code when the
    /// platform can report it; everything else is `1`. Unix statuses are
    /// truncated to 8 bits, so codes outside `1..=255` map to `1` there.
    /// Windows exit codes are passed through whole.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ApplicationFailed { code } if is_reportable(*code) => *code,
            _ => 1,
        }
    }
}

#[cfg(windows)]
fn is_reportable(code: i32) -> bool {
    code != 0
}

#[cfg(not(windows))]
fn is_reportable(code: i32) -> bool {
    (1..=255).contains(&code)
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
