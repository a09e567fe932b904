//! Remediation hints shown after a failed launch.

use crate::error::LauncherError;

/// Hint for a missing interpreter.
pub fn install_python(minimum: &str) -> String {
    format!("Please install Python {} or higher and make sure it is on PATH", minimum)
}

/// Hint for a failed package installation.
pub fn manual_install(command: &str) -> String {
    format!("Please run manually: {}", command)
}

/// Hint for a manifest that isn't where the installer will look.
pub fn missing_manifest(path: &str) -> String {
    format!("Requirements file not found: {}", path)
}

/// Hint for a missing application script.
pub fn missing_script(path: &str) -> String {
    format!("Application script not found: {}", path)
}

/// The hint that goes with a launch failure, if it has one.
///
/// Application failures get none; their diagnostics are the
/// application's own output.
pub fn for_error(err: &LauncherError) -> Option<String> {
    match err {
        LauncherError::InterpreterMissing { minimum, .. } => Some(install_python(minimum)),
        LauncherError::InstallFailed { command, .. } => Some(manual_install(command)),
        _ => None,
    }
}
