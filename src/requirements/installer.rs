//! Package installation from the requirements manifest.

use crate::config::LauncherConfig;
use crate::error::{LauncherError, ProcessEnd, Result};
use crate::shell::{Invocation, ProcessRunner};

/// `<interpreter> -m pip install -r <manifest>`, with pip's output shown.
///
/// pip is run through the interpreter so packages land in the same
/// environment the application will be launched with.
pub fn install_command(config: &LauncherConfig) -> Invocation {
    config
        .interpreter_command()
        .args(["-m", "pip", "install", "-r"])
        .arg(config.requirements.to_string_lossy())
        .inherit_stdio()
}

/// Install everything listed in the manifest.
///
/// A single attempt; any failure is reported as a whole.
///
/// # Errors
///
/// `InstallFailed` carrying the command line to run by hand.
pub fn install_from_manifest(runner: &dyn ProcessRunner, config: &LauncherConfig) -> Result<()> {
    let invocation = install_command(config);
    tracing::info!("Installing packages: {}", invocation.display());

    let end = match runner.run(&invocation) {
        Ok(result) if result.success => return Ok(()),
        Ok(result) => match result.exit_code {
            Some(code) => ProcessEnd::Exited(code),
            None => ProcessEnd::Signaled,
        },
        Err(e) => {
            tracing::debug!("Installer could not run: {}", e);
            ProcessEnd::NotStarted
        }
    };

    Err(LauncherError::InstallFailed {
        command: invocation.display(),
        end,
    })
}
