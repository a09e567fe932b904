//! Configuration validation rules.
//!
//! - Package names must be dotted Python identifiers, since they are
//!   spliced into an `import` statement
//! - At least one package must be listed
//! - Interpreter, manifest and script must be non-empty
//! - `min_version` must look like `X.Y` or `X.Y.Z`

use crate::config::schema::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::requirements::PythonVersion;
use regex::Regex;
use std::sync::LazyLock;

static RE_MODULE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config key the error is about
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &LauncherConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.interpreter.trim().is_empty() {
        errors.push(error("interpreter", "must not be empty"));
    }

    if config.packages.is_empty() {
        errors.push(error("packages", "at least one package is required"));
    }
    for package in &config.packages {
        if !RE_MODULE_NAME.is_match(package) {
            errors.push(error(
                "packages",
                &format!("'{}' is not a valid Python module name", package),
            ));
        }
    }

    if config.requirements.as_os_str().is_empty() {
        errors.push(error("requirements", "must not be empty"));
    }
    if config.script.as_os_str().is_empty() {
        errors.push(error("script", "must not be empty"));
    }

    if config.min_version.parse::<PythonVersion>().is_err() {
        errors.push(error(
            "min_version",
            &format!("'{}' is not a version like 3.7", config.min_version),
        ));
    }

    errors
}

fn error(field: &str, message: &str) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Validate and convert the collected errors into a single error.
pub fn validate(config: &LauncherConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(LauncherError::ConfigValidationError { message })
}
